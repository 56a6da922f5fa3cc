use serde::{Deserialize, Serialize};

use crate::lib::{format, String, Vec};
use crate::utils::{self, Unset};
use crate::ProcessingFormat;

/// One principal axis of an [`ErrorEllipse`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ErrorEllipseAxis {
    /// kilometers
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub error: Option<f64>,
    /// degrees
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub azimuth: Option<f64>,
    /// degrees
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub dip: Option<f64>,
}

impl ErrorEllipseAxis {
    pub fn new(error: Option<f64>, azimuth: Option<f64>, dip: Option<f64>) -> Self {
        Self {
            error,
            azimuth,
            dip,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.error.is_unset() && self.azimuth.is_unset() && self.dip.is_unset()
    }

    fn missing(&self, axis: &str, class: &str, errors: &mut Vec<String>) {
        for (value, what) in [
            (self.error, "error"),
            (self.azimuth, "azimuth"),
            (self.dip, "dip"),
        ] {
            if value.is_unset() {
                errors.push(format!("No {} {} in {} Class.", axis, what, class));
            }
        }
    }
}

impl ProcessingFormat for ErrorEllipseAxis {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        self.missing("axis", "ErrorEllipseAxis", &mut errors);
        errors
    }
}

/// A three axis uncertainty ellipsoid around a hypocenter.
///
/// The three axes are always written, even when empty.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ErrorEllipse {
    #[serde(rename = "E0", deserialize_with = "utils::nested")]
    pub e0: ErrorEllipseAxis,
    #[serde(rename = "E1", deserialize_with = "utils::nested")]
    pub e1: ErrorEllipseAxis,
    #[serde(rename = "E2", deserialize_with = "utils::nested")]
    pub e2: ErrorEllipseAxis,
    /// kilometers
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub maximum_horizontal_projection: Option<f64>,
    /// kilometers
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub maximum_vertical_projection: Option<f64>,
    /// kilometers
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub equivalent_horizontal_radius: Option<f64>,
}

impl ErrorEllipse {
    pub fn new(
        e0: ErrorEllipseAxis,
        e1: ErrorEllipseAxis,
        e2: ErrorEllipseAxis,
        maximum_horizontal_projection: Option<f64>,
        maximum_vertical_projection: Option<f64>,
        equivalent_horizontal_radius: Option<f64>,
    ) -> Self {
        Self {
            e0,
            e1,
            e2,
            maximum_horizontal_projection,
            maximum_vertical_projection,
            equivalent_horizontal_radius,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.e0.is_empty()
            && self.e1.is_empty()
            && self.e2.is_empty()
            && self.maximum_horizontal_projection.is_unset()
            && self.maximum_vertical_projection.is_unset()
            && self.equivalent_horizontal_radius.is_unset()
    }
}

impl ProcessingFormat for ErrorEllipse {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        self.e0.missing("E0", "ErrorEllipse", &mut errors);
        self.e1.missing("E1", "ErrorEllipse", &mut errors);
        self.e2.missing("E2", "ErrorEllipse", &mut errors);
        require!(
            errors,
            self.maximum_horizontal_projection,
            "No MaximumHorizontalProjection in ErrorEllipse Class."
        );
        require!(
            errors,
            self.maximum_vertical_projection,
            "No MaximumVerticalProjection in ErrorEllipse Class."
        );
        require!(
            errors,
            self.equivalent_horizontal_radius,
            "No EquivalentHorizontalRadius in ErrorEllipse Class."
        );
        errors
    }
}
