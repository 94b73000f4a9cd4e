//! Travel time estimation for clinic locations.
//!
//! The crate answers one question for a visitor of the clinic website: how
//! long would it take to get from where I am to the selected clinic on foot,
//! by car and by public transport. Estimates are derived from great-circle
//! distance and a fixed speed/overhead profile per travel mode.

pub mod algo;
pub mod controller;
mod error;
pub mod estimate;
pub mod loading;
pub mod model;
pub mod position;
pub mod prelude;
pub mod publish;

pub use algo::{distance_km, project_minutes};
pub use controller::SelectionController;
pub use error::Error;
pub use estimate::{Estimate, EstimateValue};
pub use loading::{EstimatorConfig, create_controller};
pub use model::{Coordinate, Destination, ModeProfile, ModeProfiles, TravelMode};
pub use position::{PositionError, PositionOptions};
pub use publish::{DisplayState, Note, Publisher};

/// Whole minutes shown to the visitor
pub type Minutes = u32;
/// Index of a destination in document order
pub type DestinationId = usize;

/// Mean Earth radius used by the distance calculator, km
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Placeholder shown when an estimate cannot be computed
pub const PLACEHOLDER: &str = "–";
