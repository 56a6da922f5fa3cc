use serde::{Deserialize, Serialize};

use crate::lib::{format, String, ToString, Vec};
use crate::utils::{self, fold_errors, text, Unset};
use crate::{DataKind, ProcessingFormat};

/// One point of a travel time curve.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TravelTimePlotDataSample {
    /// degrees
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub distance: Option<f64>,
    /// seconds
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub travel_time: Option<f64>,
    /// seconds
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub statistical_spread: Option<f64>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub observability: Option<f64>,
}

impl TravelTimePlotDataSample {
    pub fn new(
        distance: Option<f64>,
        travel_time: Option<f64>,
        statistical_spread: Option<f64>,
        observability: Option<f64>,
    ) -> Self {
        Self {
            distance,
            travel_time,
            statistical_spread,
            observability,
        }
    }
}

impl ProcessingFormat for TravelTimePlotDataSample {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require!(
            errors,
            self.distance,
            "No Distance in TravelTimePlotDataSample Class."
        );
        require!(
            errors,
            self.travel_time,
            "No Travel Time in TravelTimePlotDataSample Class."
        );
        errors
    }
}

/// The curve of a single phase.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TravelTimePlotDataBranch {
    #[serde(deserialize_with = "utils::string", skip_serializing_if = "Unset::is_unset")]
    pub phase: Option<String>,
    #[serde(deserialize_with = "utils::list", skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<TravelTimePlotDataSample>,
}

impl TravelTimePlotDataBranch {
    pub fn new(phase: &str, samples: Vec<TravelTimePlotDataSample>) -> Self {
        Self {
            phase: text(phase),
            samples,
        }
    }
}

impl ProcessingFormat for TravelTimePlotDataBranch {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require!(
            errors,
            self.phase,
            "Empty Phase in TravelTimePlotDataBranch Class."
        );
        if self.samples.is_empty() {
            errors.push("No samples in TravelTimePlotDataBranch Class.".to_string());
        }
        for (index, sample) in self.samples.iter().enumerate() {
            fold_errors(
                &mut errors,
                format!(
                    "Invalid sample at index {} in TravelTimePlotDataBranch Class:",
                    index
                ),
                sample.errors(),
            );
        }
        errors
    }
}

/// A set of travel time curves, one branch per phase.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TravelTimePlotData {
    #[serde(
        rename = "Type",
        skip_deserializing,
        default = "DataKind::travel_time_plot_data"
    )]
    kind: DataKind,
    /// seconds
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub maximum_travel_time: Option<f64>,
    #[serde(deserialize_with = "utils::list", skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<TravelTimePlotDataBranch>,
}

impl Default for TravelTimePlotData {
    fn default() -> Self {
        Self {
            kind: DataKind::TravelTimePlotData,
            maximum_travel_time: None,
            branches: Vec::new(),
        }
    }
}

impl TravelTimePlotData {
    pub fn new(maximum_travel_time: Option<f64>, branches: Vec<TravelTimePlotDataBranch>) -> Self {
        Self {
            kind: DataKind::TravelTimePlotData,
            maximum_travel_time,
            branches,
        }
    }

    /// Always [`DataKind::TravelTimePlotData`].
    pub fn kind(&self) -> DataKind {
        self.kind
    }
}

impl ProcessingFormat for TravelTimePlotData {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require!(
            errors,
            self.maximum_travel_time,
            "No Maximum Travel Time in TravelTimePlotData Class."
        );
        if self.branches.is_empty() {
            errors.push("No branches in TravelTimePlotData Class.".to_string());
        }
        for (index, branch) in self.branches.iter().enumerate() {
            fold_errors(
                &mut errors,
                format!("Invalid branch at index {} in TravelTimePlotData Class:", index),
                branch.errors(),
            );
        }
        errors
    }
}
