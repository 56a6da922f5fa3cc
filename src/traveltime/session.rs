use serde::{Deserialize, Serialize};

use crate::lib::{String, ToString, Vec};
use crate::utils::{self, known, text, Unset};
use crate::ProcessingFormat;

/// Configuration of a travel time session: the source and which phases to
/// compute for it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TravelTimeSession {
    /// kilometers
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub source_depth: Option<f64>,
    #[serde(deserialize_with = "utils::string", skip_serializing_if = "Unset::is_unset")]
    pub earth_model: Option<String>,
    #[serde(deserialize_with = "utils::strings", skip_serializing_if = "Vec::is_empty")]
    pub phase_types: Vec<String>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub source_latitude: Option<f64>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub source_longitude: Option<f64>,
    #[serde(deserialize_with = "utils::flag")]
    pub return_all_phases: bool,
    #[serde(deserialize_with = "utils::flag")]
    pub return_back_branches: bool,
    #[serde(deserialize_with = "utils::flag")]
    pub convert_tectonic: bool,
    #[serde(rename = "UseRSTT", deserialize_with = "utils::flag")]
    pub use_rstt: bool,
    #[serde(deserialize_with = "utils::flag")]
    pub is_plot: bool,
}

impl TravelTimeSession {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source_depth: Option<f64>,
        earth_model: &str,
        phase_types: Vec<String>,
        source_latitude: Option<f64>,
        source_longitude: Option<f64>,
        return_all_phases: bool,
        return_back_branches: bool,
        convert_tectonic: bool,
        use_rstt: bool,
        is_plot: bool,
    ) -> Self {
        Self {
            source_depth,
            earth_model: text(earth_model),
            phase_types,
            source_latitude,
            source_longitude,
            return_all_phases,
            return_back_branches,
            convert_tectonic,
            use_rstt,
            is_plot,
        }
    }
}

impl ProcessingFormat for TravelTimeSession {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        match known(self.source_depth) {
            None => errors.push("No Source Depth in TravelTimeSession Class.".to_string()),
            Some(depth) if !(-100.0..=1500.0).contains(&depth) => errors.push(
                "Source Depth in TravelTimeSession Class not in the range of -100 to 1500."
                    .to_string(),
            ),
            _ => {}
        }
        check_range!(
            errors,
            self.source_latitude,
            -90.0..=90.0,
            "Invalid Source Latitude in TravelTimeSession class."
        );
        check_range!(
            errors,
            self.source_longitude,
            -180.0..=180.0,
            "Invalid Source Longitude in TravelTimeSession class."
        );
        errors
    }
}
