use serde::{Deserialize, Serialize};

use crate::lib::{String, Vec};
use crate::utils::{self, text, Unset};
use crate::ProcessingFormat;

/// A station, identified by its SCNL code, and where it sits.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Site {
    #[serde(deserialize_with = "utils::string", skip_serializing_if = "Unset::is_unset")]
    pub station: Option<String>,
    #[serde(deserialize_with = "utils::string", skip_serializing_if = "Unset::is_unset")]
    pub channel: Option<String>,
    #[serde(deserialize_with = "utils::string", skip_serializing_if = "Unset::is_unset")]
    pub network: Option<String>,
    #[serde(deserialize_with = "utils::string", skip_serializing_if = "Unset::is_unset")]
    pub location: Option<String>,
    /// decimal degrees
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub latitude: Option<f64>,
    /// decimal degrees
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub longitude: Option<f64>,
    /// meters
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub elevation: Option<f64>,
}

impl Site {
    pub fn new(
        station: &str,
        channel: &str,
        network: &str,
        location: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
        elevation: Option<f64>,
    ) -> Self {
        Self {
            station: text(station),
            channel: text(channel),
            network: text(network),
            location: text(location),
            latitude,
            longitude,
            elevation,
        }
    }
}

impl ProcessingFormat for Site {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require!(errors, self.station, "Empty Station in Site class.");
        require!(errors, self.network, "Empty Network in Site class.");
        check_range!(
            errors,
            self.latitude,
            -90.0..=90.0,
            "Latitude in site class not in the range of -90 to 90 degrees."
        );
        check_range!(
            errors,
            self.longitude,
            -180.0..=180.0,
            "Longitude in site class not in the range of -180 to 180 degrees."
        );
        check_range!(
            errors,
            self.elevation,
            -20000.0..=10000.0,
            "Elevation in site class not in the range of -20000 to 10000 meters."
        );
        errors
    }
}
