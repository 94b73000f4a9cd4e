//! Output side of the estimator
//!
//! The controller never renders anything itself. Whatever presents the page
//! implements [`Publisher`] and receives the text of every output field.

use std::fmt;

use serde::Serialize;

use crate::{DestinationId, EstimateValue, TravelMode};

/// Free-text status line shown under the estimates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    /// No position yet, estimates are placeholders
    EnableLocation,
    /// Estimates were computed from the visitor's position
    Approximate,
    /// The position request failed or timed out
    LocationFailed,
    /// The environment has no geolocation capability
    Unsupported,
}

impl Note {
    pub fn text(self) -> &'static str {
        match self {
            Note::EnableLocation => "activa la ubicación para calcular",
            Note::Approximate => "aprox. desde tu ubicación",
            Note::LocationFailed => "no se pudo obtener tu ubicación",
            Note::Unsupported => "tu navegador no soporta geolocalización",
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl Serialize for Note {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text())
    }
}

/// UI sink for estimator output
pub trait Publisher {
    /// Writes the value of one travel mode field
    fn publish(&mut self, mode: TravelMode, value: EstimateValue);

    /// Replaces the status note
    fn publish_note(&mut self, note: Note);

    /// Swaps the map image for the active destination
    fn publish_map(&mut self, map: &str);

    /// Moves the active marker to `id`
    fn publish_active(&mut self, _id: DestinationId) {}
}

impl<P: Publisher + ?Sized> Publisher for &mut P {
    fn publish(&mut self, mode: TravelMode, value: EstimateValue) {
        (**self).publish(mode, value);
    }

    fn publish_note(&mut self, note: Note) {
        (**self).publish_note(note);
    }

    fn publish_map(&mut self, map: &str) {
        (**self).publish_map(map);
    }

    fn publish_active(&mut self, id: DestinationId) {
        (**self).publish_active(id);
    }
}

/// Last published content of every output field
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DisplayState {
    pub walk: EstimateValue,
    pub car: EstimateValue,
    pub transit: EstimateValue,
    pub note: Option<Note>,
    pub map: Option<String>,
    pub active: Option<DestinationId>,
}

impl DisplayState {
    pub fn value(&self, mode: TravelMode) -> EstimateValue {
        match mode {
            TravelMode::Walk => self.walk,
            TravelMode::Car => self.car,
            TravelMode::Transit => self.transit,
        }
    }
}

impl Publisher for DisplayState {
    fn publish(&mut self, mode: TravelMode, value: EstimateValue) {
        match mode {
            TravelMode::Walk => self.walk = value,
            TravelMode::Car => self.car = value,
            TravelMode::Transit => self.transit = value,
        }
    }

    fn publish_note(&mut self, note: Note) {
        self.note = Some(note);
    }

    fn publish_map(&mut self, map: &str) {
        self.map = Some(map.to_string());
    }

    fn publish_active(&mut self, id: DestinationId) {
        self.active = Some(id);
    }
}
