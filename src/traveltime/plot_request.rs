use serde::{Deserialize, Serialize};

use crate::lib::{format, String, ToString, Vec};
use crate::utils::{self, fold_errors, text, Unset};
use crate::{ProcessingFormat, TravelTimePlotDataBranch, TravelTimeSource};

/// Asks for travel time curves from one source. `Response` carries the
/// answer once computed.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TravelTimePlotRequest {
    #[serde(
        deserialize_with = "utils::nested",
        skip_serializing_if = "TravelTimeSource::is_empty"
    )]
    pub source: TravelTimeSource,
    #[serde(deserialize_with = "utils::string", skip_serializing_if = "Unset::is_unset")]
    pub earth_model: Option<String>,
    #[serde(deserialize_with = "utils::strings", skip_serializing_if = "Vec::is_empty")]
    pub phase_types: Vec<String>,
    #[serde(deserialize_with = "utils::flag")]
    pub return_all_phases: bool,
    #[serde(deserialize_with = "utils::flag")]
    pub return_back_branches: bool,
    #[serde(deserialize_with = "utils::flag")]
    pub convert_tectonic: bool,
    #[serde(deserialize_with = "utils::list", skip_serializing_if = "Vec::is_empty")]
    pub response: Vec<TravelTimePlotDataBranch>,
}

impl TravelTimePlotRequest {
    pub fn new(
        source: TravelTimeSource,
        earth_model: &str,
        phase_types: Vec<String>,
        return_all_phases: bool,
        return_back_branches: bool,
        convert_tectonic: bool,
        response: Vec<TravelTimePlotDataBranch>,
    ) -> Self {
        Self {
            source,
            earth_model: text(earth_model),
            phase_types,
            return_all_phases,
            return_back_branches,
            convert_tectonic,
            response,
        }
    }
}

impl ProcessingFormat for TravelTimePlotRequest {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.source.is_empty() {
            errors.push("No Source in TravelTimePlotRequest Class.".to_string());
        } else {
            fold_errors(
                &mut errors,
                "Source object did not validate in TravelTimePlotRequest Class:",
                self.source.errors(),
            );
        }
        for (index, branch) in self.response.iter().enumerate() {
            fold_errors(
                &mut errors,
                format!(
                    "Invalid response branch at index {} in TravelTimePlotRequest Class:",
                    index
                ),
                branch.errors(),
            );
        }
        errors
    }
}
