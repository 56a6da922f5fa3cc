#![no_std]
#![deny(unsafe_code)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error!("processing-formats crate requires either std or alloc feature to be enabled");

use anyhow::anyhow;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

pub use location::{
    ErrorEllipse, ErrorEllipseAxis, Hypocenter, LocationData, LocationRequest,
    LocationRequestBuilder, LocationResult, LocationResultBuilder, Pick, PickBuilder, Site, Source,
    SourceType, DEFAULT_EARTH_MODEL, DEFAULT_SLAB_RESOLUTION,
};
pub use service::{LocationService, TravelTimeService};
pub use time::{format_iso8601, is_iso8601, parse_iso8601};
pub use traveltime::{
    DataKind, TravelTimeData, TravelTimePlotData, TravelTimePlotDataBranch,
    TravelTimePlotDataSample, TravelTimePlotRequest, TravelTimeReceiver, TravelTimeRequest,
    TravelTimeRequestType, TravelTimeSession, TravelTimeSource,
};

#[macro_use]
mod utils;
mod location;
mod service;
mod time;
mod traveltime;

mod lib {
    #[cfg(all(feature = "alloc", not(feature = "std")))]
    pub use alloc::{
        format,
        string::{String, ToString},
        vec,
        vec::Vec,
    };
    #[cfg(all(feature = "alloc", not(feature = "std")))]
    pub use core::{fmt, str::FromStr};
    #[cfg(feature = "std")]
    pub use std::{
        fmt, format,
        str::FromStr,
        string::{String, ToString},
        vec,
        vec::Vec,
    };
}

use crate::lib::{String, Vec};

pub type FormatResult<T> = anyhow::Result<T>;

/// The conversion contract shared by every processing format.
///
/// Parsing is lenient: a key that is missing or holds the wrong JSON type
/// leaves the field unset instead of failing. Problems only surface through
/// [`ProcessingFormat::errors`].
pub trait ProcessingFormat: Default + Clone + Serialize + DeserializeOwned {
    /// Builds a record from a parsed JSON value. Anything but an object
    /// yields the empty record.
    fn from_json(json: &Value) -> Self {
        utils::record(json)
    }

    /// Parses `text` as JSON and builds a record from it. Fails only when
    /// `text` is not JSON at all.
    fn from_json_str(text: &str) -> FormatResult<Self> {
        let json: Value = serde_json::from_str(text).map_err(|e| anyhow!(e))?;
        Ok(Self::from_json(&json))
    }

    fn to_json(&self) -> FormatResult<Value> {
        serde_json::to_value(self).map_err(|e| anyhow!(e))
    }

    fn to_json_string(&self) -> FormatResult<String> {
        serde_json::to_string(self).map_err(|e| anyhow!(e))
    }

    /// Human readable validation errors, in a fixed order. Empty when the
    /// record is valid.
    fn errors(&self) -> Vec<String>;

    fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }
}
