use serde::{Deserialize, Serialize};

use crate::lib::{String, Vec};
use crate::utils::{self, text, Unset};
use crate::{DataKind, ProcessingFormat};

/// Predicted travel time of one phase, with its derivatives and the
/// statistics an associator needs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TravelTimeData {
    #[serde(
        rename = "Type",
        skip_deserializing,
        default = "DataKind::travel_time_data"
    )]
    kind: DataKind,
    #[serde(deserialize_with = "utils::string", skip_serializing_if = "Unset::is_unset")]
    pub phase: Option<String>,
    /// seconds
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub travel_time: Option<f64>,
    /// seconds per degree
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub distance_derivative: Option<f64>,
    /// seconds per kilometer
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub depth_derivative: Option<f64>,
    /// seconds per radian
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub ray_derivative: Option<f64>,
    /// seconds
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub statistical_spread: Option<f64>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub observability: Option<f64>,
    #[serde(deserialize_with = "utils::string", skip_serializing_if = "Unset::is_unset")]
    pub teleseismic_phase_group: Option<String>,
    #[serde(deserialize_with = "utils::string", skip_serializing_if = "Unset::is_unset")]
    pub auxiliary_phase_group: Option<String>,
    #[serde(deserialize_with = "utils::flag")]
    pub location_use_flag: bool,
    #[serde(deserialize_with = "utils::flag")]
    pub association_weight_flag: bool,
}

impl Default for TravelTimeData {
    fn default() -> Self {
        Self {
            kind: DataKind::TravelTimeData,
            phase: None,
            travel_time: None,
            distance_derivative: None,
            depth_derivative: None,
            ray_derivative: None,
            statistical_spread: None,
            observability: None,
            teleseismic_phase_group: None,
            auxiliary_phase_group: None,
            location_use_flag: false,
            association_weight_flag: false,
        }
    }
}

impl TravelTimeData {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        phase: &str,
        travel_time: Option<f64>,
        distance_derivative: Option<f64>,
        depth_derivative: Option<f64>,
        ray_derivative: Option<f64>,
        statistical_spread: Option<f64>,
        observability: Option<f64>,
        teleseismic_phase_group: &str,
        auxiliary_phase_group: &str,
        location_use_flag: bool,
        association_weight_flag: bool,
    ) -> Self {
        Self {
            kind: DataKind::TravelTimeData,
            phase: text(phase),
            travel_time,
            distance_derivative,
            depth_derivative,
            ray_derivative,
            statistical_spread,
            observability,
            teleseismic_phase_group: text(teleseismic_phase_group),
            auxiliary_phase_group: text(auxiliary_phase_group),
            location_use_flag,
            association_weight_flag,
        }
    }

    /// Always [`DataKind::TravelTimeData`].
    pub fn kind(&self) -> DataKind {
        self.kind
    }
}

impl ProcessingFormat for TravelTimeData {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require!(errors, self.phase, "Empty Phase in TravelTimeData Class.");
        require!(errors, self.travel_time, "No Travel Time in TravelTimeData Class.");
        require!(
            errors,
            self.distance_derivative,
            "No Distance Derivative in TravelTimeData Class."
        );
        require!(
            errors,
            self.depth_derivative,
            "No Depth Derivative in TravelTimeData Class."
        );
        require!(errors, self.ray_derivative, "No Ray Derivative in TravelTimeData Class.");
        require!(
            errors,
            self.statistical_spread,
            "No Statistical Spread in TravelTimeData Class."
        );
        require!(errors, self.observability, "No Observability in TravelTimeData Class.");
        require!(
            errors,
            self.teleseismic_phase_group,
            "No Teleseismic Phase Group in TravelTimeData Class."
        );
        require!(
            errors,
            self.auxiliary_phase_group,
            "No Auxiliary Phase Group in TravelTimeData Class."
        );
        errors
    }
}
