pub use crate::{DestinationId, Minutes, PLACEHOLDER};

// Re-export key components
pub use crate::algo::{distance_km, project_minutes};
pub use crate::controller::{DestinationEstimate, SelectionController};
pub use crate::estimate::{Estimate, EstimateValue};
pub use crate::loading::{EstimatorConfig, GeolocationConfig, create_controller};
pub use crate::model::{Coordinate, Destination, ModeProfile, ModeProfiles, TravelMode};
pub use crate::position::{PositionError, PositionOptions, PositionState};
pub use crate::publish::{DisplayState, Note, Publisher};

pub use crate::Error;
