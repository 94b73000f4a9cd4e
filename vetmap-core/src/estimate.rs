//! Per-mode travel time estimates

use std::fmt;

use serde::{Serialize, Serializer};

use crate::algo::{distance_km, project_minutes};
use crate::{Coordinate, Minutes, ModeProfiles, PLACEHOLDER, TravelMode};

/// A single displayed value: whole minutes or the placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EstimateValue {
    Minutes(Minutes),
    #[default]
    Unknown,
}

impl EstimateValue {
    pub fn minutes(self) -> Option<Minutes> {
        match self {
            EstimateValue::Minutes(minutes) => Some(minutes),
            EstimateValue::Unknown => None,
        }
    }

    pub fn is_unknown(self) -> bool {
        self == EstimateValue::Unknown
    }
}

impl fmt::Display for EstimateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateValue::Minutes(minutes) => write!(f, "{minutes}"),
            EstimateValue::Unknown => f.write_str(PLACEHOLDER),
        }
    }
}

impl Serialize for EstimateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EstimateValue::Minutes(minutes) => serializer.serialize_u32(*minutes),
            EstimateValue::Unknown => serializer.serialize_str(PLACEHOLDER),
        }
    }
}

/// Travel time to one destination for every mode.
///
/// Always derived from the current inputs, never stored between recomputations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Estimate {
    pub walk: EstimateValue,
    pub car: EstimateValue,
    pub transit: EstimateValue,
}

impl Estimate {
    /// Placeholder for every mode
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Estimate from `origin` to `destination` with the given profiles
    pub fn between(origin: &Coordinate, destination: &Coordinate, profiles: &ModeProfiles) -> Self {
        Self::from_distance(distance_km(origin, destination), profiles)
    }

    pub fn from_distance(distance_km: f64, profiles: &ModeProfiles) -> Self {
        Self {
            walk: project_minutes(distance_km, profiles.get(TravelMode::Walk)),
            car: project_minutes(distance_km, profiles.get(TravelMode::Car)),
            transit: project_minutes(distance_km, profiles.get(TravelMode::Transit)),
        }
    }

    pub fn get(&self, mode: TravelMode) -> EstimateValue {
        match mode {
            TravelMode::Walk => self.walk,
            TravelMode::Car => self.car,
            TravelMode::Transit => self.transit,
        }
    }

    /// `(mode, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (TravelMode, EstimateValue)> + '_ {
        TravelMode::ALL.into_iter().map(|mode| (mode, self.get(mode)))
    }

    pub fn is_unknown(&self) -> bool {
        self.iter().all(|(_, value)| value.is_unknown())
    }
}
