use std::time::Duration;

use serde::Deserialize;

use super::de::deserialize_degrees;
use crate::position::{DEFAULT_TIMEOUT, PositionOptions};
use crate::{Coordinate, Destination, DestinationId, ModeProfiles};

/// Everything the estimator needs to run on a page
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub modes: ModeProfiles,
    pub geolocation: GeolocationConfig,
    pub destinations: Vec<DestinationConfig>,
}

/// Options for the single position request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeolocationConfig {
    pub high_accuracy: bool,
    pub timeout_ms: u64,
}

impl Default for GeolocationConfig {
    #[allow(clippy::cast_possible_truncation)]
    fn default() -> Self {
        let options = PositionOptions::default();
        Self {
            high_accuracy: options.high_accuracy,
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
        }
    }
}

impl GeolocationConfig {
    pub fn options(&self) -> PositionOptions {
        PositionOptions {
            high_accuracy: self.high_accuracy,
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

/// A clinic entry as written on the page.
///
/// `lat`/`lng` take numbers or strings, the latter parsed like markup data
/// attributes (see [`super::parse_degrees`]).
#[derive(Debug, Clone, Deserialize)]
pub struct DestinationConfig {
    pub name: String,
    #[serde(deserialize_with = "deserialize_degrees")]
    pub lat: f64,
    #[serde(deserialize_with = "deserialize_degrees")]
    pub lng: f64,
    #[serde(default)]
    pub map: Option<String>,
}

impl DestinationConfig {
    pub(crate) fn to_destination(&self, id: DestinationId) -> Destination {
        Destination {
            id,
            name: self.name.clone(),
            coordinate: Coordinate::new(self.lat, self.lng),
            map: self.map.clone(),
        }
    }
}
