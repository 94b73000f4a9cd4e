//! Simulated host geolocation
//!
//! Plays the part of the browser: answers the single position request of a
//! run, enforcing the requested timeout.

use std::time::Duration;

use tokio::sync::oneshot;
use vetmap_core::{Coordinate, PositionError, PositionOptions};

use crate::cli::GeolocationArgs;

pub type PositionOutcome = Result<Coordinate, PositionError>;

#[derive(Debug, Clone)]
pub enum GeolocationProvider {
    /// Answers with a fixed position after `delay`
    Fixed { position: Coordinate, delay: Duration },
    /// The visitor refuses to share the position
    Denied { delay: Duration },
    /// No geolocation capability at all
    Unsupported,
}

impl GeolocationProvider {
    pub fn from_args(args: &GeolocationArgs) -> Self {
        let delay = Duration::from_millis(args.delay_ms);
        match (args.lat, args.lng) {
            (Some(lat), Some(lng)) => GeolocationProvider::Fixed {
                position: Coordinate::new(lat, lng),
                delay,
            },
            _ if args.deny => GeolocationProvider::Denied { delay },
            _ => GeolocationProvider::Unsupported,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, GeolocationProvider::Unsupported)
    }

    async fn current_position(&self) -> PositionOutcome {
        match self {
            GeolocationProvider::Fixed { position, delay } => {
                tokio::time::sleep(*delay).await;
                Ok(*position)
            }
            GeolocationProvider::Denied { delay } => {
                tokio::time::sleep(*delay).await;
                Err(PositionError::PermissionDenied)
            }
            GeolocationProvider::Unsupported => Err(PositionError::Unsupported),
        }
    }
}

/// Issues the one position request of this run.
///
/// The outcome arrives on the returned receiver exactly once; there is no
/// retry and no cancellation.
pub fn request_position(
    provider: GeolocationProvider,
    options: PositionOptions,
) -> oneshot::Receiver<PositionOutcome> {
    let (sender, receiver) = oneshot::channel();

    if !provider.is_supported() {
        let _ = sender.send(Err(PositionError::Unsupported));
        return receiver;
    }

    tracing::info!(
        high_accuracy = options.high_accuracy,
        timeout = ?options.timeout,
        "Requesting visitor position"
    );
    tokio::spawn(async move {
        let outcome = tokio::time::timeout(options.timeout, provider.current_position())
            .await
            .unwrap_or(Err(PositionError::Timeout(options.timeout)));

        if sender.send(outcome).is_err() {
            tracing::debug!("Position outcome dropped, nobody is listening anymore");
        }
    });

    receiver
}

/// Flattens a closed channel into an unavailable position
pub fn received(outcome: Result<PositionOutcome, oneshot::error::RecvError>) -> PositionOutcome {
    outcome.unwrap_or_else(|_| abandoned())
}

/// Outcome of a request whose answering side went away
pub fn abandoned() -> PositionOutcome {
    Err(PositionError::Unavailable(
        "position request was abandoned".to_string(),
    ))
}
