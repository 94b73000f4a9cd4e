use log::{info, warn};

use super::config::EstimatorConfig;
use crate::{Destination, Error, Publisher, SelectionController};

/// Creates a selection controller from the configuration
///
/// # Errors
///
/// Returns an error if a mode profile or the geolocation timeout is invalid
pub fn create_controller<P: Publisher>(
    config: &EstimatorConfig,
    publisher: P,
) -> Result<SelectionController<P>, Error> {
    validate_config(config)?;

    let destinations: Vec<Destination> = config
        .destinations
        .iter()
        .enumerate()
        .map(|(id, entry)| entry.to_destination(id))
        .collect();

    for destination in &destinations {
        if !destination.coordinate.is_finite() {
            warn!(
                "Destination '{}' has no usable coordinate, its estimates will stay unknown",
                destination.name
            );
        }
    }

    info!("Loaded {} destinations", destinations.len());
    Ok(SelectionController::new(
        destinations,
        config.modes,
        publisher,
    ))
}

fn validate_config(config: &EstimatorConfig) -> Result<(), Error> {
    config.modes.validate()?;

    if config.geolocation.timeout_ms == 0 {
        return Err(Error::Config(
            "Geolocation timeout must be greater than zero".to_string(),
        ));
    }

    if let Some(entry) = config.destinations.iter().find(|d| d.name.trim().is_empty()) {
        return Err(Error::InvalidData(format!(
            "Destination at ({}, {}) has an empty name",
            entry.lat, entry.lng
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DisplayState, Note, TravelMode};

    fn config_from_json(json: &str) -> EstimatorConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = config_from_json("{}");
        assert_eq!(config.modes, crate::ModeProfiles::default());
        assert_eq!(config.geolocation.options(), crate::PositionOptions::default());

        let controller = create_controller(&config, DisplayState::default()).unwrap();
        assert!(controller.destinations().is_empty());
    }

    #[test]
    fn destinations_keep_document_order() {
        let config = config_from_json(
            r#"{
                "destinations": [
                    {"name": "Centro", "lat": 40.1, "lng": -3.0, "map": "img/centro.png"},
                    {"name": "Norte", "lat": "40.2", "lng": "-3.0"}
                ]
            }"#,
        );

        let controller = create_controller(&config, DisplayState::default()).unwrap();
        let destinations = controller.destinations();

        assert_eq!(destinations.len(), 2);
        assert_eq!(destinations[1].id, 1);
        assert_eq!(destinations[1].coordinate.lat(), 40.2);
        assert_eq!(destinations[0].map.as_deref(), Some("img/centro.png"));
        assert_eq!(controller.active(), Some(0));
    }

    #[test]
    fn unparsable_coordinate_gives_unknown_estimate() {
        let config = config_from_json(
            r#"{"destinations": [{"name": "Sur", "lat": "sin dato", "lng": "-3.0"}]}"#,
        );
        let mut controller = create_controller(&config, DisplayState::default()).unwrap();
        controller.on_position_resolved(crate::Coordinate::new(40.0, -3.0));

        let state = controller.publisher();
        for mode in TravelMode::ALL {
            assert!(state.value(mode).is_unknown());
        }
        assert_eq!(state.note, Some(Note::Approximate));
    }

    #[test]
    fn partial_mode_override() {
        let config = config_from_json(r#"{"modes": {"car": {"speed_kmh": 50}}}"#);
        assert_eq!(config.modes.car.speed_kmh, 50.0);
        assert_eq!(config.modes.car.buffer_min, 0.0);
        assert_eq!(config.modes.walk.speed_kmh, 4.5);
    }

    #[test]
    fn invalid_profiles_are_rejected() {
        let config = config_from_json(r#"{"modes": {"walk": {"speed_kmh": -4.5}}}"#);
        assert!(matches!(
            create_controller(&config, DisplayState::default()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = config_from_json(r#"{"geolocation": {"timeout_ms": 0}}"#);
        assert!(create_controller(&config, DisplayState::default()).is_err());
    }

    #[test]
    fn blank_names_are_rejected() {
        let config =
            config_from_json(r#"{"destinations": [{"name": " ", "lat": 1.0, "lng": 2.0}]}"#);
        assert!(matches!(
            create_controller(&config, DisplayState::default()),
            Err(Error::InvalidData(_))
        ));
    }
}
