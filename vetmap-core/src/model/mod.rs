//! Data model for travel time estimation
//!
//! Contains coordinates, clinic destinations and travel mode profiles.

pub mod coordinate;
pub mod destination;
pub mod travel_mode;

pub use coordinate::Coordinate;
pub use destination::Destination;
pub use travel_mode::{ModeProfile, ModeProfiles, TravelMode};
