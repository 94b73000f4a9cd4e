//! This module is responsible for loading the estimator configuration
//! (mode profiles, geolocation options, clinic list) and building a
//! ready-to-use selection controller from it.

mod builder;
mod config;
mod de;

pub use builder::create_controller;
pub use config::{DestinationConfig, EstimatorConfig, GeolocationConfig};
pub use de::parse_degrees;
