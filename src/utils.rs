//! Lenient field conversions shared by every format.
//!
//! A key that is missing, `null` or of the wrong JSON type reads as "not
//! supplied". Empty strings and negative counts read the same way, so that a
//! field is present in the output iff it was usable in the input.

use core::fmt::Display;

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use crate::lib::{String, ToString, Vec};

/// Presence rule used by `skip_serializing_if`.
pub(crate) trait Unset {
    fn is_unset(&self) -> bool;
}

impl Unset for Option<f64> {
    fn is_unset(&self) -> bool {
        self.map_or(true, f64::is_nan)
    }
}

impl Unset for Option<String> {
    fn is_unset(&self) -> bool {
        self.as_deref().map_or(true, str::is_empty)
    }
}

impl Unset for Option<u32> {
    fn is_unset(&self) -> bool {
        self.is_none()
    }
}

/// Pushes `$message` when `$value` was never supplied.
macro_rules! require {
    ($errors:expr, $value:expr, $message:expr) => {
        if $crate::utils::Unset::is_unset(&$value) {
            $errors.push($crate::lib::ToString::to_string($message));
        }
    };
}

/// Pushes `$message` when a supplied `$value` lies outside `$range`.
macro_rules! check_range {
    ($errors:expr, $value:expr, $range:expr, $message:expr) => {
        if let Some(value) = $crate::utils::known($value) {
            if !($range).contains(&value) {
                $errors.push($crate::lib::ToString::to_string($message));
            }
        }
    };
}

/// A supplied, non-NaN value.
#[inline]
pub(crate) fn known(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

/// Constructor argument convention: the empty string means "not supplied".
#[inline]
pub(crate) fn text(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Folds the messages of a nested record into a single entry of `errors`.
pub(crate) fn fold_errors(errors: &mut Vec<String>, prefix: impl Display, nested: Vec<String>) {
    if nested.is_empty() {
        return;
    }
    let mut message = prefix.to_string();
    for error in nested {
        message.push(' ');
        message.push_str(&error);
    }
    errors.push(message);
}

fn kind(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Builds `T` from `json`, or the empty `T` when `json` is not an object.
pub(crate) fn record<T: DeserializeOwned + Default>(json: &Value) -> T {
    if !json.is_object() {
        log::warn!("expected an object, found {}; using an empty record", kind(json));
        return T::default();
    }
    T::deserialize(json).unwrap_or_else(|e| {
        log::warn!("unreadable record, using an empty one: {}", e);
        T::default()
    })
}

pub(crate) fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// A string, or an integer rendered as one.
pub(crate) fn identifier<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    })
}

pub(crate) fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?
        .as_u64()
        .and_then(|n| u32::try_from(n).ok()))
}

pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool().unwrap_or(false))
}

pub(crate) fn nested<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(record(&Value::deserialize(deserializer)?))
}

/// Every element of an array, in order. Anything else is an empty list.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.iter().map(record).collect(),
        _ => Vec::new(),
    })
}

/// The string elements of an array; other elements are skipped.
pub(crate) fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lib::vec;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize, Default, Debug)]
    #[serde(default, rename_all = "PascalCase")]
    struct Probe {
        #[serde(deserialize_with = "number")]
        value: Option<f64>,
        #[serde(deserialize_with = "string")]
        name: Option<String>,
        #[serde(deserialize_with = "count")]
        count: Option<u32>,
        #[serde(deserialize_with = "flag")]
        on: bool,
        #[serde(rename = "ID", deserialize_with = "identifier")]
        id: Option<String>,
    }

    #[test]
    fn wrong_types_read_as_unset() {
        let probe: Probe = record(&json!({
            "Value": "1.5",
            "Name": 7,
            "Count": -3,
            "On": "yes",
            "ID": 1.5,
        }));
        assert_eq!(probe.value, None);
        assert_eq!(probe.name, None);
        assert_eq!(probe.count, None);
        assert!(!probe.on);
        assert_eq!(probe.id, None);
    }

    #[test]
    fn integers_are_numbers_and_identifiers() {
        let probe: Probe = record(&json!({"Value": 45, "Count": 12, "ID": 12345678}));
        assert_eq!(probe.value, Some(45.0));
        assert_eq!(probe.count, Some(12));
        assert_eq!(probe.id.as_deref(), Some("12345678"));
    }

    #[test]
    fn non_objects_are_empty_records() {
        let probe: Probe = record(&json!([1, 2, 3]));
        assert!(probe.value.is_none() && probe.name.is_none());
        let probe: Probe = record(&json!("Value"));
        assert!(probe.count.is_none());
    }

    #[test]
    fn empty_strings_are_unset() {
        let probe: Probe = record(&json!({"Name": ""}));
        assert_eq!(probe.name, None);
        assert!(Some(String::new()).is_unset());
        assert!(Some(f64::NAN).is_unset());
    }

    #[test]
    fn fold_joins_nested_messages() {
        let mut errors = Vec::new();
        fold_errors(&mut errors, "Outer:", Vec::new());
        assert!(errors.is_empty());
        fold_errors(
            &mut errors,
            "Outer:",
            vec![String::from("first."), String::from("second.")],
        );
        assert_eq!(errors, vec![String::from("Outer: first. second.")]);
    }
}
