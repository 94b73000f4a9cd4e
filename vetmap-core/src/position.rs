//! Single-shot acquisition of the visitor's position
//!
//! The host environment owns the actual request (and enforces its timeout);
//! this module describes what is asked for and what can come back.

use std::time::Duration;

use thiserror::Error;

use crate::Coordinate;

/// Default wait for a position fix
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(8000);

/// Options passed along with the one position request of a page load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    pub timeout: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Reasons a position could not be obtained
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("Geolocation is not supported by this environment")]
    Unsupported,
    #[error("Permission to read the position was denied")]
    PermissionDenied,
    #[error("No position within {0:?}")]
    Timeout(Duration),
    #[error("Position unavailable: {0}")]
    Unavailable(String),
}

/// Where the one-way `pending -> resolved | failed` transition stands
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PositionState {
    #[default]
    Pending,
    Resolved(Coordinate),
    Failed(PositionError),
}

impl PositionState {
    pub fn coordinate(&self) -> Option<&Coordinate> {
        match self {
            PositionState::Resolved(coordinate) => Some(coordinate),
            _ => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, PositionState::Pending)
    }
}
