//! Conversions between decimal epoch seconds and the ISO8601 text used on
//! the wire (`YYYY-MM-DDTHH:MM:SS.sssZ`, UTC, millisecond precision).

use anyhow::anyhow;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

use crate::lib::{format, String, ToString};
use crate::utils::known;
use crate::FormatResult;

const ISO8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Parses an ISO8601 timestamp into decimal epoch seconds. A timestamp
/// without an offset is taken as UTC.
pub fn parse_iso8601(text: &str) -> FormatResult<f64> {
    let stamp = match DateTime::parse_from_rfc3339(text) {
        Ok(stamp) => stamp.with_timezone(&Utc),
        Err(_) => NaiveDateTime::parse_from_str(text, NAIVE_FORMAT)
            .map_err(|e| anyhow!("invalid ISO8601 time {:?}: {}", text, e))?
            .and_utc(),
    };
    Ok(stamp.timestamp() as f64 + f64::from(stamp.timestamp_subsec_nanos()) / 1e9)
}

/// Formats decimal epoch seconds, rounded to the nearest millisecond.
pub fn format_iso8601(epoch: f64) -> FormatResult<String> {
    if !epoch.is_finite() {
        return Err(anyhow!("epoch time {} is not a finite number", epoch));
    }
    let scaled = epoch * 1000.0;
    // `as` saturates, out of range values are rejected by chrono below
    let millis = if scaled >= 0.0 {
        (scaled + 0.5) as i64
    } else {
        (scaled - 0.5) as i64
    };
    let stamp = DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| anyhow!("epoch time {} is out of range", epoch))?;
    Ok(stamp.format(ISO8601_FORMAT).to_string())
}

pub fn is_iso8601(text: &str) -> bool {
    parse_iso8601(text).is_ok()
}

/// Validation of a required time field, phrased for `class`.
pub(crate) fn time_error(epoch: Option<f64>, field: &str, class: &str) -> Option<String> {
    match known(epoch) {
        None => Some(format!("{} is missing in {} class.", field, class)),
        Some(epoch) => match format_iso8601(epoch) {
            Ok(text) if is_iso8601(&text) => None,
            Ok(_) => Some(format!("{} did not validate in {} class.", field, class)),
            Err(e) => Some(e.to_string()),
        },
    }
}

/// `skip_serializing_if` for time fields: nothing is written unless the
/// value can be rendered.
pub(crate) fn is_unrepresentable(epoch: &Option<f64>) -> bool {
    known(*epoch).map_or(true, |e| format_iso8601(e).is_err())
}

pub(crate) fn serialize<S>(epoch: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match known(*epoch).map(format_iso8601) {
        Some(Ok(text)) => serializer.serialize_str(&text),
        _ => serializer.serialize_none(),
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => match parse_iso8601(&text) {
            Ok(epoch) => Some(epoch),
            Err(e) => {
                log::warn!("ignoring time: {}", e);
                None
            }
        },
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        a - b < 1e-6 && b - a < 1e-6
    }

    #[test]
    fn round_trip_keeps_milliseconds() {
        let epoch = parse_iso8601("2015-12-28T21:32:24.017Z").unwrap();
        assert!(close(epoch, 1451338344.017));
        assert_eq!(format_iso8601(epoch).unwrap(), "2015-12-28T21:32:24.017Z");
    }

    #[test]
    fn offsets_and_naive_times() {
        let utc = parse_iso8601("2015-12-28T21:32:24.017Z").unwrap();
        let offset = parse_iso8601("2015-12-28T22:32:24.017+01:00").unwrap();
        let naive = parse_iso8601("2015-12-28T21:32:24.017").unwrap();
        assert!(close(utc, offset));
        assert!(close(utc, naive));
    }

    #[test]
    fn rounds_to_nearest_millisecond() {
        assert_eq!(format_iso8601(0.0004).unwrap(), "1970-01-01T00:00:00.000Z");
        assert_eq!(format_iso8601(0.0006).unwrap(), "1970-01-01T00:00:00.001Z");
        assert_eq!(format_iso8601(-1.0).unwrap(), "1969-12-31T23:59:59.000Z");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_iso8601("not a time").is_err());
        assert!(parse_iso8601("").is_err());
        assert!(!is_iso8601("2015-13-28T21:32:24.017Z"));
        assert!(format_iso8601(f64::NAN).is_err());
        assert!(format_iso8601(f64::INFINITY).is_err());
        assert!(format_iso8601(1e300).is_err());
    }

    #[test]
    fn missing_time_message() {
        assert_eq!(
            time_error(None, "Time", "Pick").as_deref(),
            Some("Time is missing in Pick class.")
        );
        assert_eq!(time_error(Some(1451338344.017), "Time", "Pick"), None);
    }
}
