use serde::{Deserialize, Serialize};

use crate::lib::{format, String, Vec};
use crate::utils::{self, fold_errors, text, Unset};
use crate::{ErrorEllipse, Hypocenter, Pick, ProcessingFormat, Source};

/// The answer of a locator: a hypocenter, the picks that support it and
/// quality statistics.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct LocationResult {
    #[serde(deserialize_with = "utils::nested")]
    pub hypocenter: Hypocenter,
    #[serde(deserialize_with = "utils::list", skip_serializing_if = "Vec::is_empty")]
    pub supporting_data: Vec<Pick>,
    #[serde(
        rename = "ID",
        deserialize_with = "utils::string",
        skip_serializing_if = "Unset::is_unset"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "utils::nested", skip_serializing_if = "Source::is_empty")]
    pub source: Source,
    #[serde(deserialize_with = "utils::count", skip_serializing_if = "Unset::is_unset")]
    pub number_of_associated_stations: Option<u32>,
    #[serde(deserialize_with = "utils::count", skip_serializing_if = "Unset::is_unset")]
    pub number_of_associated_phases: Option<u32>,
    #[serde(deserialize_with = "utils::count", skip_serializing_if = "Unset::is_unset")]
    pub number_of_used_stations: Option<u32>,
    #[serde(deserialize_with = "utils::count", skip_serializing_if = "Unset::is_unset")]
    pub number_of_used_phases: Option<u32>,
    /// degrees
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub gap: Option<f64>,
    /// degrees
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub secondary_gap: Option<f64>,
    /// degrees
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub minimum_distance: Option<f64>,
    /// seconds
    #[serde(
        rename = "RMS",
        deserialize_with = "utils::number",
        skip_serializing_if = "Unset::is_unset"
    )]
    pub rms: Option<f64>,
    #[serde(deserialize_with = "utils::string", skip_serializing_if = "Unset::is_unset")]
    pub quality: Option<String>,
    /// kilometers
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub bayesian_depth: Option<f64>,
    /// kilometers
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub bayesian_range: Option<f64>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub depth_importance: Option<f64>,
    #[serde(deserialize_with = "utils::string", skip_serializing_if = "Unset::is_unset")]
    pub locator_exit_code: Option<String>,
    #[serde(
        deserialize_with = "utils::nested",
        skip_serializing_if = "ErrorEllipse::is_empty"
    )]
    pub error_ellipse: ErrorEllipse,
}

/// Former name of [`LocationResult`].
pub type LocationData = LocationResult;

impl LocationResult {
    pub fn builder() -> LocationResultBuilder {
        LocationResultBuilder::new()
    }

    pub fn is_empty(&self) -> bool {
        self.hypocenter.is_empty()
            && self.supporting_data.is_empty()
            && self.id.is_unset()
            && self.source.is_empty()
            && self.number_of_associated_stations.is_unset()
            && self.number_of_associated_phases.is_unset()
            && self.number_of_used_stations.is_unset()
            && self.number_of_used_phases.is_unset()
            && self.gap.is_unset()
            && self.secondary_gap.is_unset()
            && self.minimum_distance.is_unset()
            && self.rms.is_unset()
            && self.quality.is_unset()
            && self.bayesian_depth.is_unset()
            && self.bayesian_range.is_unset()
            && self.depth_importance.is_unset()
            && self.locator_exit_code.is_unset()
            && self.error_ellipse.is_empty()
    }
}

impl ProcessingFormat for LocationResult {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        fold_errors(
            &mut errors,
            "Hypocenter object did not validate in LocationResult class:",
            self.hypocenter.errors(),
        );
        for (index, pick) in self.supporting_data.iter().enumerate() {
            fold_errors(
                &mut errors,
                format!(
                    "Invalid supporting data at index {} in LocationResult class:",
                    index
                ),
                pick.errors(),
            );
        }
        if !self.source.is_empty() {
            fold_errors(
                &mut errors,
                "Source object did not validate in LocationResult class:",
                self.source.errors(),
            );
        }
        check_range!(
            errors,
            self.gap,
            0.0..=360.0,
            "Invalid Gap in LocationResult class."
        );
        check_range!(
            errors,
            self.secondary_gap,
            0.0..=360.0,
            "Invalid Secondary Gap in LocationResult class."
        );
        check_range!(
            errors,
            self.minimum_distance,
            0.0..,
            "Invalid Minimum Distance in LocationResult class."
        );
        if !self.error_ellipse.is_empty() {
            fold_errors(
                &mut errors,
                "ErrorEllipse object did not validate in LocationResult class:",
                self.error_ellipse.errors(),
            );
        }
        errors
    }
}

/// Builds a [`LocationResult`] field by field.
#[derive(Debug, Clone, Default)]
pub struct LocationResultBuilder {
    result: LocationResult,
}

impl LocationResultBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hypocenter(mut self, hypocenter: Hypocenter) -> Self {
        self.result.hypocenter = hypocenter;
        self
    }

    pub fn supporting_data(mut self, picks: Vec<Pick>) -> Self {
        self.result.supporting_data = picks;
        self
    }

    pub fn pick(mut self, pick: Pick) -> Self {
        self.result.supporting_data.push(pick);
        self
    }

    pub fn id(mut self, id: &str) -> Self {
        self.result.id = text(id);
        self
    }

    pub fn source(mut self, source: Source) -> Self {
        self.result.source = source;
        self
    }

    pub fn source_parts(mut self, agency_id: &str, author: &str, source_type: &str) -> Self {
        self.result.source = Source::new(agency_id, author, source_type);
        self
    }

    /// Associated stations, associated phases, used stations, used phases.
    pub fn counts(
        mut self,
        associated_stations: u32,
        associated_phases: u32,
        used_stations: u32,
        used_phases: u32,
    ) -> Self {
        self.result.number_of_associated_stations = Some(associated_stations);
        self.result.number_of_associated_phases = Some(associated_phases);
        self.result.number_of_used_stations = Some(used_stations);
        self.result.number_of_used_phases = Some(used_phases);
        self
    }

    pub fn gap(mut self, gap: f64) -> Self {
        self.result.gap = Some(gap);
        self
    }

    pub fn secondary_gap(mut self, secondary_gap: f64) -> Self {
        self.result.secondary_gap = Some(secondary_gap);
        self
    }

    pub fn minimum_distance(mut self, minimum_distance: f64) -> Self {
        self.result.minimum_distance = Some(minimum_distance);
        self
    }

    pub fn rms(mut self, rms: f64) -> Self {
        self.result.rms = Some(rms);
        self
    }

    pub fn quality(mut self, quality: &str) -> Self {
        self.result.quality = text(quality);
        self
    }

    pub fn bayesian_depth(mut self, bayesian_depth: f64) -> Self {
        self.result.bayesian_depth = Some(bayesian_depth);
        self
    }

    pub fn bayesian_range(mut self, bayesian_range: f64) -> Self {
        self.result.bayesian_range = Some(bayesian_range);
        self
    }

    pub fn depth_importance(mut self, depth_importance: f64) -> Self {
        self.result.depth_importance = Some(depth_importance);
        self
    }

    pub fn locator_exit_code(mut self, code: &str) -> Self {
        self.result.locator_exit_code = text(code);
        self
    }

    pub fn error_ellipse(mut self, error_ellipse: ErrorEllipse) -> Self {
        self.result.error_ellipse = error_ellipse;
        self
    }

    pub fn build(self) -> LocationResult {
        self.result
    }
}
