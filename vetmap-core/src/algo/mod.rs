//! Pure numeric building blocks of the estimator

mod distance;
mod duration;

pub use distance::distance_km;
pub use duration::project_minutes;
