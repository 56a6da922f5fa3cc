use serde::{Deserialize, Serialize};

use crate::lib::{format, String, Vec};
use crate::utils::{self, known, Unset};
use crate::ProcessingFormat;

/// The event end of a travel time path.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TravelTimeSource {
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub longitude: Option<f64>,
    /// kilometers
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub depth: Option<f64>,
}

impl TravelTimeSource {
    pub fn new(latitude: Option<f64>, longitude: Option<f64>, depth: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
            depth,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.latitude.is_unset() && self.longitude.is_unset() && self.depth.is_unset()
    }
}

fn bounded(errors: &mut Vec<String>, value: Option<f64>, name: &str, low: f64, high: f64) {
    match known(value) {
        None => errors.push(format!("No {} in TravelTimeSource Class.", name)),
        Some(v) if !(low..=high).contains(&v) => errors.push(format!(
            "{} in TravelTimeSource not in the range of {} to {}.",
            name, low, high
        )),
        _ => {}
    }
}

impl ProcessingFormat for TravelTimeSource {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        bounded(&mut errors, self.latitude, "Latitude", -90.0, 90.0);
        bounded(&mut errors, self.longitude, "Longitude", -180.0, 180.0);
        bounded(&mut errors, self.depth, "Depth", -100.0, 1000.0);
        errors
    }
}
