use anyhow::anyhow;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::lib::{fmt, format, FromStr, String, ToString, Vec};
use crate::utils::{self, fold_errors, record, text, Unset};
use crate::{DataKind, ProcessingFormat, TravelTimeData, TravelTimePlotData};

/// What a [`TravelTimeRequest`] asks for, and therefore which list travels
/// in its `Data` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelTimeRequestType {
    /// travel times at one distance, answered with [`TravelTimeData`]
    Standard,
    /// curves, answered with [`TravelTimePlotData`]
    Plot,
    /// curves with statistics, answered with [`TravelTimePlotData`]
    PlotStatistics,
}

impl TravelTimeRequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelTimeRequestType::Standard => "Standard",
            TravelTimeRequestType::Plot => "Plot",
            TravelTimeRequestType::PlotStatistics => "PlotStatistics",
        }
    }
}

impl FromStr for TravelTimeRequestType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(TravelTimeRequestType::Standard),
            "Plot" => Ok(TravelTimeRequestType::Plot),
            "PlotStatistics" => Ok(TravelTimeRequestType::PlotStatistics),
            _ => Err(anyhow!("unsupported travel time request type {:?}", s)),
        }
    }
}

impl fmt::Display for TravelTimeRequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A travel time lookup for one receiver.
///
/// On the wire both `data` and `plot_data` share the `Data` array; each
/// element's own `Type` decides where it lands when parsing, and the
/// request type decides which list is written.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "Wire", into = "Wire")]
pub struct TravelTimeRequest {
    /// One of the [`TravelTimeRequestType`] names.
    pub request_type: Option<String>,
    /// degrees
    pub distance: Option<f64>,
    /// kilometers
    pub elevation: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub data: Vec<TravelTimeData>,
    pub plot_data: Vec<TravelTimePlotData>,
}

impl Default for TravelTimeRequest {
    fn default() -> Self {
        Self {
            request_type: Some(TravelTimeRequestType::Standard.as_str().to_string()),
            distance: None,
            elevation: None,
            latitude: None,
            longitude: None,
            data: Vec::new(),
            plot_data: Vec::new(),
        }
    }
}

impl TravelTimeRequest {
    /// An empty `request_type` means [`TravelTimeRequestType::Standard`].
    pub fn new(
        request_type: &str,
        distance: Option<f64>,
        elevation: Option<f64>,
        latitude: Option<f64>,
        longitude: Option<f64>,
        data: Vec<TravelTimeData>,
        plot_data: Vec<TravelTimePlotData>,
    ) -> Self {
        Self {
            request_type: text(request_type)
                .or_else(|| Some(TravelTimeRequestType::Standard.as_str().to_string())),
            distance,
            elevation,
            latitude,
            longitude,
            data,
            plot_data,
        }
    }

    /// The parsed request type, `None` when unset or unsupported.
    pub fn kind(&self) -> Option<TravelTimeRequestType> {
        self.request_type.as_deref()?.parse().ok()
    }
}

impl ProcessingFormat for TravelTimeRequest {
    fn errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let kind = self.kind();
        if self.request_type.is_unset() {
            errors.push("Empty Type in TravelTimeRequest Class.".to_string());
        } else if kind.is_none() {
            errors.push("Unsupported type in TravelTimeRequest Class.".to_string());
        }
        require!(errors, self.distance, "No Distance in TravelTimeRequest Class.");
        require!(errors, self.elevation, "No Elevation in TravelTimeRequest Class.");
        check_range!(
            errors,
            self.latitude,
            -90.0..=90.0,
            "Invalid Latitude in TravelTimeRequest class."
        );
        check_range!(
            errors,
            self.longitude,
            -180.0..=180.0,
            "Invalid Longitude in TravelTimeRequest class."
        );
        match kind {
            Some(TravelTimeRequestType::Standard) => {
                for (index, data) in self.data.iter().enumerate() {
                    fold_errors(
                        &mut errors,
                        format!(
                            "Invalid TravelTimeData at index {} in TravelTimeRequest Class of type Standard:",
                            index
                        ),
                        data.errors(),
                    );
                }
            }
            Some(kind) => {
                for (index, data) in self.plot_data.iter().enumerate() {
                    fold_errors(
                        &mut errors,
                        format!(
                            "Invalid TravelTimePlotData at index {} in TravelTimeRequest Class of type {}:",
                            index, kind
                        ),
                        data.errors(),
                    );
                }
            }
            None => {}
        }
        errors
    }
}

/// The JSON shape of a [`TravelTimeRequest`]. A missing `Type` reads as
/// unset.
#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
struct Wire {
    #[serde(
        rename = "Type",
        deserialize_with = "utils::string",
        skip_serializing_if = "Unset::is_unset"
    )]
    request_type: Option<String>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    distance: Option<f64>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    elevation: Option<f64>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    latitude: Option<f64>,
    #[serde(deserialize_with = "utils::number", skip_serializing_if = "Unset::is_unset")]
    longitude: Option<f64>,
    #[serde(deserialize_with = "elements", skip_serializing_if = "Vec::is_empty")]
    data: Vec<Value>,
}

fn elements<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}

impl From<Wire> for TravelTimeRequest {
    fn from(wire: Wire) -> Self {
        let mut data: Vec<TravelTimeData> = Vec::new();
        let mut plot_data: Vec<TravelTimePlotData> = Vec::new();
        for element in &wire.data {
            match DataKind::of(element) {
                Some(DataKind::TravelTimeData) => data.push(record(element)),
                Some(DataKind::TravelTimePlotData) => plot_data.push(record(element)),
                None => log::warn!("skipping Data element without a known Type"),
            }
        }
        log::trace!(
            "parsed travel time request with {} data and {} plot data",
            data.len(),
            plot_data.len()
        );
        Self {
            request_type: wire.request_type,
            distance: wire.distance,
            elevation: wire.elevation,
            latitude: wire.latitude,
            longitude: wire.longitude,
            data,
            plot_data,
        }
    }
}

fn values<T: Serialize>(items: &[T]) -> Vec<Value> {
    items
        .iter()
        .filter_map(|item| match serde_json::to_value(item) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("dropping unserializable Data element: {}", e);
                None
            }
        })
        .collect()
}

impl From<TravelTimeRequest> for Wire {
    fn from(request: TravelTimeRequest) -> Self {
        let data = match request.kind() {
            Some(TravelTimeRequestType::Standard) => values(&request.data),
            Some(_) => values(&request.plot_data),
            None => Vec::new(),
        };
        Self {
            request_type: request.request_type,
            distance: request.distance,
            elevation: request.elevation,
            latitude: request.latitude,
            longitude: request.longitude,
            data,
        }
    }
}
