use serde::{Deserialize, Deserializer, Serialize};

use crate::lib::{format, String, ToString, Vec};
use crate::time;
use crate::utils::{self, fold_errors, known, text, Unset};
use crate::{LocationResult, Pick, ProcessingFormat, Source};

pub const DEFAULT_EARTH_MODEL: &str = "ak135";
pub const DEFAULT_SLAB_RESOLUTION: &str = "20spd";

/// Everything a locator needs: a starting hypocenter, the picks, and the
/// knobs that steer the algorithm. A locator may echo the request back with
/// `OutputData` filled in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct LocationRequest {
    #[serde(
        rename = "ID",
        deserialize_with = "utils::identifier",
        skip_serializing_if = "Unset::is_unset"
    )]
    pub id: Option<String>,
    #[serde(deserialize_with = "utils::nested", skip_serializing_if = "Source::is_empty")]
    pub source: Source,
    /// Name of the locator this request is meant for. Required: a request
    /// without it does not validate.
    #[serde(
        rename = "Type",
        deserialize_with = "utils::string",
        skip_serializing_if = "Unset::is_unset"
    )]
    pub request_type: Option<String>,
    #[serde(deserialize_with = "earth_model")]
    pub earth_model: String,
    #[serde(deserialize_with = "slab_resolution")]
    pub slab_resolution: String,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub source_latitude: Option<f64>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub source_longitude: Option<f64>,
    /// epoch seconds
    #[serde(with = "time", skip_serializing_if = "time::is_unrepresentable")]
    pub source_origin_time: Option<f64>,
    /// kilometers
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub source_depth: Option<f64>,
    #[serde(deserialize_with = "utils::list", skip_serializing_if = "Vec::is_empty")]
    pub input_data: Vec<Pick>,
    #[serde(deserialize_with = "utils::flag")]
    pub is_location_new: bool,
    #[serde(deserialize_with = "utils::flag")]
    pub is_location_held: bool,
    #[serde(deserialize_with = "utils::flag")]
    pub is_depth_held: bool,
    #[serde(deserialize_with = "utils::flag")]
    pub is_bayesian_depth: bool,
    /// kilometers
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub bayesian_depth: Option<f64>,
    /// kilometers
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    pub bayesian_spread: Option<f64>,
    #[serde(rename = "UseSVD", deserialize_with = "utils::flag")]
    pub use_svd: bool,
    #[serde(rename = "ReassessInitialPhaseIDs", deserialize_with = "utils::flag")]
    pub reassess_initial_phase_ids: bool,
    #[serde(
        deserialize_with = "utils::nested",
        skip_serializing_if = "LocationResult::is_empty"
    )]
    pub output_data: LocationResult,
}

impl Default for LocationRequest {
    fn default() -> Self {
        Self {
            id: None,
            source: Source::default(),
            request_type: None,
            earth_model: DEFAULT_EARTH_MODEL.to_string(),
            slab_resolution: DEFAULT_SLAB_RESOLUTION.to_string(),
            source_latitude: None,
            source_longitude: None,
            source_origin_time: None,
            source_depth: None,
            input_data: Vec::new(),
            is_location_new: false,
            is_location_held: false,
            is_depth_held: false,
            is_bayesian_depth: false,
            bayesian_depth: None,
            bayesian_spread: None,
            use_svd: false,
            reassess_initial_phase_ids: false,
            output_data: LocationResult::default(),
        }
    }
}

fn earth_model<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(utils::string(deserializer)?.unwrap_or_else(|| DEFAULT_EARTH_MODEL.to_string()))
}

fn slab_resolution<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(utils::string(deserializer)?.unwrap_or_else(|| DEFAULT_SLAB_RESOLUTION.to_string()))
}

impl LocationRequest {
    pub fn builder() -> LocationRequestBuilder {
        LocationRequestBuilder::new()
    }
}

fn check_coordinate(errors: &mut Vec<String>, value: Option<f64>, limit: f64, name: &str) {
    match known(value) {
        None => errors.push(format!("No {} in LocationRequest class.", name)),
        Some(v) if !(-limit..=limit).contains(&v) => {
            errors.push(format!("Invalid {} in LocationRequest class.", name))
        }
        _ => {}
    }
}

impl ProcessingFormat for LocationRequest {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        require!(errors, self.request_type, "Empty Type in LocationRequest class.");
        check_coordinate(&mut errors, self.source_latitude, 90.0, "sourceLatitude");
        check_coordinate(&mut errors, self.source_longitude, 180.0, "sourceLongitude");
        errors.extend(time::time_error(
            self.source_origin_time,
            "sourceOriginTime",
            "LocationRequest",
        ));
        match known(self.source_depth) {
            None => errors.push("No sourceDepth in LocationRequest class.".to_string()),
            Some(depth) if !(-100.0..=1500.0).contains(&depth) => {
                errors.push("Invalid sourceDepth in LocationRequest class.".to_string())
            }
            _ => {}
        }
        for (index, pick) in self.input_data.iter().enumerate() {
            fold_errors(
                &mut errors,
                format!(
                    "Invalid input data at index {} in LocationRequest class:",
                    index
                ),
                pick.errors(),
            );
        }
        if !self.source.is_empty() {
            fold_errors(
                &mut errors,
                "Source object did not validate in LocationRequest class:",
                self.source.errors(),
            );
        }
        if !self.output_data.is_empty() {
            fold_errors(
                &mut errors,
                "outputData object did not validate in LocationRequest class:",
                self.output_data.errors(),
            );
        }
        errors
    }
}

/// Builds a [`LocationRequest`]; unset text arguments keep the defaults.
#[derive(Debug, Clone, Default)]
pub struct LocationRequestBuilder {
    request: LocationRequest,
}

impl LocationRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.request.id = text(id);
        self
    }

    pub fn source(mut self, source: Source) -> Self {
        self.request.source = source;
        self
    }

    pub fn source_parts(mut self, agency_id: &str, author: &str, source_type: &str) -> Self {
        self.request.source = Source::new(agency_id, author, source_type);
        self
    }

    pub fn request_type(mut self, request_type: &str) -> Self {
        self.request.request_type = text(request_type);
        self
    }

    pub fn earth_model(mut self, earth_model: &str) -> Self {
        self.request.earth_model =
            text(earth_model).unwrap_or_else(|| DEFAULT_EARTH_MODEL.to_string());
        self
    }

    pub fn slab_resolution(mut self, slab_resolution: &str) -> Self {
        self.request.slab_resolution =
            text(slab_resolution).unwrap_or_else(|| DEFAULT_SLAB_RESOLUTION.to_string());
        self
    }

    /// Starting hypocenter: latitude, longitude, origin time (epoch seconds)
    /// and depth.
    pub fn hypocenter(
        mut self,
        latitude: f64,
        longitude: f64,
        origin_time: f64,
        depth: f64,
    ) -> Self {
        self.request.source_latitude = Some(latitude);
        self.request.source_longitude = Some(longitude);
        self.request.source_origin_time = Some(origin_time);
        self.request.source_depth = Some(depth);
        self
    }

    pub fn input_data(mut self, picks: Vec<Pick>) -> Self {
        self.request.input_data = picks;
        self
    }

    pub fn pick(mut self, pick: Pick) -> Self {
        self.request.input_data.push(pick);
        self
    }

    pub fn is_location_new(mut self, value: bool) -> Self {
        self.request.is_location_new = value;
        self
    }

    pub fn is_location_held(mut self, value: bool) -> Self {
        self.request.is_location_held = value;
        self
    }

    pub fn is_depth_held(mut self, value: bool) -> Self {
        self.request.is_depth_held = value;
        self
    }

    pub fn is_bayesian_depth(mut self, value: bool) -> Self {
        self.request.is_bayesian_depth = value;
        self
    }

    pub fn bayesian_depth(mut self, depth: f64, spread: f64) -> Self {
        self.request.bayesian_depth = Some(depth);
        self.request.bayesian_spread = Some(spread);
        self
    }

    pub fn use_svd(mut self, value: bool) -> Self {
        self.request.use_svd = value;
        self
    }

    pub fn reassess_initial_phase_ids(mut self, value: bool) -> Self {
        self.request.reassess_initial_phase_ids = value;
        self
    }

    pub fn output_data(mut self, result: LocationResult) -> Self {
        self.request.output_data = result;
        self
    }

    pub fn build(self) -> LocationRequest {
        log::trace!(
            "built location request {:?} with {} picks",
            self.request.id,
            self.request.input_data.len()
        );
        self.request
    }
}
