//! Selection controller
//!
//! Owns the two pieces of mutable page state, the visitor's position and the
//! active destination, and republishes the estimate whenever either changes.
//! Position results and selection events may arrive in any order; each entry
//! point recomputes against the current state, so both orders converge.

use log::{debug, info, warn};

use crate::position::PositionState;
use crate::{
    Coordinate, Destination, DestinationId, Error, Estimate, ModeProfiles, Note, PositionError,
    Publisher,
};

/// Estimate for one destination, as listed in an overview
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationEstimate {
    pub id: DestinationId,
    pub name: String,
    pub distance_km: Option<f64>,
    pub estimate: Estimate,
}

pub struct SelectionController<P: Publisher> {
    destinations: Vec<Destination>,
    profiles: ModeProfiles,
    position: PositionState,
    active: Option<DestinationId>,
    publisher: P,
}

impl<P: Publisher> SelectionController<P> {
    /// Creates the controller and activates the first destination, if any.
    ///
    /// The default selection publishes its estimate right away (placeholders
    /// until a position arrives) but leaves the map as it is. Destination ids
    /// are renumbered to their position in `destinations`.
    pub fn new(mut destinations: Vec<Destination>, profiles: ModeProfiles, publisher: P) -> Self {
        for (id, destination) in destinations.iter_mut().enumerate() {
            if destination.id != id {
                debug!(
                    "Destination '{}' renumbered from {} to {id}",
                    destination.name, destination.id
                );
                destination.id = id;
            }
        }

        let mut controller = Self {
            destinations,
            profiles,
            position: PositionState::Pending,
            active: None,
            publisher,
        };

        if controller.destinations.is_empty() {
            info!("No destinations on the page, nothing to estimate");
        } else {
            controller.activate(0);
            controller.recompute_and_publish();
        }

        controller
    }

    /// Makes `id` the only active destination and republishes its estimate
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownDestination`] if `id` is not one of the loaded destinations
    pub fn select_destination(&mut self, id: DestinationId) -> Result<&Destination, Error> {
        if id >= self.destinations.len() {
            return Err(Error::UnknownDestination(id));
        }

        self.activate(id);
        if let Some(map) = &self.destinations[id].map {
            self.publisher.publish_map(map);
        }
        self.recompute_and_publish();

        Ok(&self.destinations[id])
    }

    /// Stores the visitor's position and refreshes the active estimate.
    ///
    /// The position is taken once per page load; later calls are ignored.
    pub fn on_position_resolved(&mut self, position: Coordinate) {
        if self.position.is_settled() {
            warn!("Position {position} arrived after the request had settled, ignoring");
            return;
        }

        info!("Visitor position resolved at {position}");
        self.position = PositionState::Resolved(position);
        self.recompute_and_publish();
    }

    /// Records a failed position request and tells the visitor about it
    pub fn on_position_failed(&mut self, error: PositionError) {
        if self.position.is_settled() {
            warn!("Position error '{error}' arrived after the request had settled, ignoring");
            return;
        }

        info!("Visitor position unavailable: {error}");
        let note = match error {
            PositionError::Unsupported => Note::Unsupported,
            _ => Note::LocationFailed,
        };
        self.position = PositionState::Failed(error);
        self.publisher.publish_note(note);
    }

    /// Applies the outcome of the single position request
    pub fn on_position(&mut self, outcome: Result<Coordinate, PositionError>) {
        match outcome {
            Ok(position) => self.on_position_resolved(position),
            Err(error) => self.on_position_failed(error),
        }
    }

    pub fn active(&self) -> Option<DestinationId> {
        self.active
    }

    pub fn active_destination(&self) -> Option<&Destination> {
        self.active.map(|id| &self.destinations[id])
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn profiles(&self) -> &ModeProfiles {
        &self.profiles
    }

    pub fn position_state(&self) -> &PositionState {
        &self.position
    }

    pub fn user_position(&self) -> Option<&Coordinate> {
        self.position.coordinate()
    }

    /// Estimate for the active destination given the current state
    pub fn current_estimate(&self) -> Option<Estimate> {
        self.active_destination()
            .map(|destination| self.estimate_for(destination))
    }

    /// Estimates for every destination from the current position, in document order.
    ///
    /// Does not touch the selection or the publisher.
    pub fn estimate_all(&self) -> Vec<DestinationEstimate> {
        let user = self.user_position();
        self.destinations
            .iter()
            .map(|destination| DestinationEstimate {
                id: destination.id,
                name: destination.name.clone(),
                distance_km: user.map(|user| crate::distance_km(user, &destination.coordinate)),
                estimate: self.estimate_for(destination),
            })
            .collect()
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    pub fn into_publisher(self) -> P {
        self.publisher
    }

    fn activate(&mut self, id: DestinationId) {
        if let Some(previous) = self.active.replace(id) {
            if previous != id {
                debug!("Deactivated destination {previous}");
            }
        }
        self.publisher.publish_active(id);
    }

    fn estimate_for(&self, destination: &Destination) -> Estimate {
        match self.user_position() {
            Some(user) => Estimate::between(user, &destination.coordinate, &self.profiles),
            None => Estimate::unknown(),
        }
    }

    fn recompute_and_publish(&mut self) {
        let Some(destination) = self.active_destination() else {
            debug!("No active destination, skipping recomputation");
            return;
        };

        let estimate = self.estimate_for(destination);
        debug!(
            "Recomputed estimate for '{}': {estimate:?}",
            destination.name
        );

        for (mode, value) in estimate.iter() {
            self.publisher.publish(mode, value);
        }
        let note = if self.user_position().is_some() {
            Note::Approximate
        } else {
            Note::EnableLocation
        };
        self.publisher.publish_note(note);
    }
}
