use serde::{Deserialize, Serialize};

use crate::lib::{format, String, ToString, Vec};
use crate::utils::{self, fold_errors, known, text, Unset};
use crate::{ProcessingFormat, TravelTimeData};

/// The station end of a travel time path, located either by distance from
/// the source or by coordinates. `Branches` carries the computed answer.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TravelTimeReceiver {
    #[serde(
        rename = "ID",
        deserialize_with = "utils::string",
        skip_serializing_if = "Unset::is_unset"
    )]
    pub id: Option<String>,
    /// degrees
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub distance: Option<f64>,
    /// kilometers
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub elevation: Option<f64>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub latitude: Option<f64>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub longitude: Option<f64>,
    #[serde(deserialize_with = "utils::list", skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<TravelTimeData>,
}

impl TravelTimeReceiver {
    pub fn new(
        id: &str,
        distance: Option<f64>,
        elevation: Option<f64>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        branches: Vec<TravelTimeData>,
    ) -> Self {
        Self {
            id: text(id),
            distance,
            elevation,
            latitude,
            longitude,
            branches,
        }
    }
}

impl ProcessingFormat for TravelTimeReceiver {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require!(errors, self.id, "No ID in TravelTimeReceiver Class.");
        if self.distance.is_unset() && (self.latitude.is_unset() || self.longitude.is_unset()) {
            errors.push(
                "No Distance or Latitude/Longitude in TravelTimeReceiver Class.".to_string(),
            );
        }
        check_range!(
            errors,
            self.distance,
            0.0..=360.0,
            "Distance in TravelTimeReceiver not in the range of 0 to 360."
        );
        match known(self.elevation) {
            None => errors.push("No Elevation in TravelTimeReceiver Class.".to_string()),
            Some(elevation) if !(-100.0..=1000.0).contains(&elevation) => errors.push(
                "Elevation in TravelTimeReceiver not in the range of -100 to 1000.".to_string(),
            ),
            _ => {}
        }
        check_range!(
            errors,
            self.latitude,
            -90.0..=90.0,
            "Latitude in TravelTimeReceiver not in the range of -90 to 90."
        );
        check_range!(
            errors,
            self.longitude,
            -180.0..=180.0,
            "Longitude in TravelTimeReceiver not in the range of -180 to 180."
        );
        for (index, branch) in self.branches.iter().enumerate() {
            fold_errors(
                &mut errors,
                format!("Invalid branch at index {} in TravelTimeReceiver Class:", index),
                branch.errors(),
            );
        }
        errors
    }
}
