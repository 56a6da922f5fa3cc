//! Picks, hypocenters and the request/response pair exchanged with a
//! locator.

mod error_ellipse;
mod hypocenter;
mod pick;
mod request;
mod result;
mod site;
mod source;

pub use error_ellipse::{ErrorEllipse, ErrorEllipseAxis};
pub use hypocenter::Hypocenter;
pub use pick::{Pick, PickBuilder};
pub use request::{
    LocationRequest, LocationRequestBuilder, DEFAULT_EARTH_MODEL, DEFAULT_SLAB_RESOLUTION,
};
pub use result::{LocationData, LocationResult, LocationResultBuilder};
pub use site::Site;
pub use source::{Source, SourceType};
