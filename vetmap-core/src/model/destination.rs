//! Clinic locations a visitor can pick

use crate::{Coordinate, DestinationId};

/// A selectable clinic location
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    /// Position in document order
    pub id: DestinationId,
    pub name: String,
    pub coordinate: Coordinate,
    /// Map image shown while this destination is active
    pub map: Option<String>,
}

impl Destination {
    pub fn new(id: DestinationId, name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id,
            name: name.into(),
            coordinate,
            map: None,
        }
    }

    #[must_use]
    pub fn with_map(mut self, map: impl Into<String>) -> Self {
        self.map = Some(map.into());
        self
    }
}
