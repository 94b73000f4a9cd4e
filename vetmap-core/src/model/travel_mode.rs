//! Travel modes and their speed profiles

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Ways of getting to a clinic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
    Car,
    Transit,
}

impl TravelMode {
    /// All modes in display order
    pub const ALL: [TravelMode; 3] = [TravelMode::Walk, TravelMode::Car, TravelMode::Transit];

    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Walk => "walk",
            TravelMode::Car => "car",
            TravelMode::Transit => "transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Average speed and fixed overhead of a travel mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeProfile {
    /// Average door-to-door speed, km/h
    pub speed_kmh: f64,
    /// Fixed overhead added to every trip (parking, waiting), minutes
    #[serde(default)]
    pub buffer_min: f64,
}

impl ModeProfile {
    pub const fn new(speed_kmh: f64, buffer_min: f64) -> Self {
        Self {
            speed_kmh,
            buffer_min,
        }
    }

    fn validate(&self, mode: TravelMode) -> Result<(), Error> {
        if !self.speed_kmh.is_finite() || self.speed_kmh <= 0.0 {
            return Err(Error::Config(format!(
                "{mode} speed must be a positive number, got {}",
                self.speed_kmh
            )));
        }
        if !self.buffer_min.is_finite() || self.buffer_min < 0.0 {
            return Err(Error::Config(format!(
                "{mode} buffer must be a non-negative number, got {}",
                self.buffer_min
            )));
        }
        Ok(())
    }
}

/// Profiles for every travel mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeProfiles {
    pub walk: ModeProfile,
    pub car: ModeProfile,
    pub transit: ModeProfile,
}

impl Default for ModeProfiles {
    fn default() -> Self {
        Self {
            walk: ModeProfile::new(4.5, 0.0),
            car: ModeProfile::new(30.0, 7.0),
            transit: ModeProfile::new(14.0, 8.0),
        }
    }
}

impl ModeProfiles {
    pub fn get(&self, mode: TravelMode) -> &ModeProfile {
        match mode {
            TravelMode::Walk => &self.walk,
            TravelMode::Car => &self.car,
            TravelMode::Transit => &self.transit,
        }
    }

    /// Checks that every speed is positive and every buffer non-negative
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the first offending mode
    pub fn validate(&self) -> Result<(), Error> {
        TravelMode::ALL
            .iter()
            .try_for_each(|&mode| self.get(mode).validate(mode))
    }
}
