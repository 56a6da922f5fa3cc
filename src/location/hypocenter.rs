use serde::{Deserialize, Serialize};

use crate::lib::{String, ToString, Vec};
use crate::time;
use crate::utils::{self, known, Unset};
use crate::ProcessingFormat;

/// Where and when an event happened, with optional uncertainties.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Hypocenter {
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub longitude: Option<f64>,
    /// origin time, epoch seconds
    #[serde(with = "time", skip_serializing_if = "time::is_unrepresentable")]
    pub time: Option<f64>,
    /// kilometers
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub depth: Option<f64>,
    /// kilometers
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub latitude_error: Option<f64>,
    /// kilometers
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub longitude_error: Option<f64>,
    /// seconds
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub time_error: Option<f64>,
    /// kilometers
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub depth_error: Option<f64>,
}

impl Hypocenter {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        latitude: Option<f64>,
        longitude: Option<f64>,
        time: Option<f64>,
        depth: Option<f64>,
        latitude_error: Option<f64>,
        longitude_error: Option<f64>,
        time_error: Option<f64>,
        depth_error: Option<f64>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            time,
            depth,
            latitude_error,
            longitude_error,
            time_error,
            depth_error,
        }
    }

    pub fn is_empty(&self) -> bool {
        [
            self.latitude,
            self.longitude,
            self.time,
            self.depth,
            self.latitude_error,
            self.longitude_error,
            self.time_error,
            self.depth_error,
        ]
        .iter()
        .all(|value| value.is_unset())
    }
}

impl ProcessingFormat for Hypocenter {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        match known(self.latitude) {
            None => errors.push("No Latitude in Hypocenter class.".to_string()),
            Some(latitude) if !(-90.0..=90.0).contains(&latitude) => {
                errors.push("Invalid Latitude in Hypocenter class.".to_string())
            }
            _ => {}
        }
        match known(self.longitude) {
            None => errors.push("No Longitude in Hypocenter class.".to_string()),
            Some(longitude) if !(-180.0..=180.0).contains(&longitude) => {
                errors.push("Invalid Longitude in Hypocenter class.".to_string())
            }
            _ => {}
        }
        errors.extend(time::time_error(self.time, "Time", "Hypocenter"));
        match known(self.depth) {
            None => errors.push("No Depth in Hypocenter class.".to_string()),
            Some(depth) if !(-100.0..=1500.0).contains(&depth) => {
                errors.push("Invalid Depth in Hypocenter class.".to_string())
            }
            _ => {}
        }
        errors
    }
}
