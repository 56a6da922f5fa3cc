//! Travel time lookups: per phase travel times, plot curves and the
//! requests and sessions that ask for them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::lib::{fmt, FromStr};

mod data;
mod plot;
mod plot_request;
mod receiver;
mod request;
mod session;
mod source;

pub use data::TravelTimeData;
pub use plot::{TravelTimePlotData, TravelTimePlotDataBranch, TravelTimePlotDataSample};
pub use plot_request::TravelTimePlotRequest;
pub use receiver::TravelTimeReceiver;
pub use request::{TravelTimeRequest, TravelTimeRequestType};
pub use session::TravelTimeSession;
pub use source::TravelTimeSource;

/// The fixed `Type` tag carried by elements of a travel time `Data` array.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    #[serde(rename = "TTData")]
    TravelTimeData,
    #[serde(rename = "TTPlotData")]
    TravelTimePlotData,
}

impl DataKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataKind::TravelTimeData => "TTData",
            DataKind::TravelTimePlotData => "TTPlotData",
        }
    }

    /// The tag of a JSON element, if it carries a known one.
    pub fn of(json: &Value) -> Option<DataKind> {
        json.get("Type")?.as_str()?.parse().ok()
    }

    pub(crate) fn travel_time_data() -> Self {
        DataKind::TravelTimeData
    }

    pub(crate) fn travel_time_plot_data() -> Self {
        DataKind::TravelTimePlotData
    }
}

impl FromStr for DataKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TTData" => Ok(DataKind::TravelTimeData),
            "TTPlotData" => Ok(DataKind::TravelTimePlotData),
            _ => Err(anyhow::anyhow!("unknown data type {:?}", s)),
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
