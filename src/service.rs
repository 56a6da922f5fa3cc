//! Seams for the algorithms that consume these formats. Nothing in this
//! crate implements them.

use crate::{FormatResult, LocationRequest, LocationResult, TravelTimeData, TravelTimeRequest};

/// A locator: turns a request into a location.
pub trait LocationService {
    fn get_location(&self, request: &LocationRequest) -> FormatResult<LocationResult>;
}

/// A travel time calculator.
pub trait TravelTimeService {
    fn get_travel_times(&self, request: &TravelTimeRequest) -> FormatResult<TravelTimeData>;
}
