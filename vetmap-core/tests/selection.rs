use vetmap_core::prelude::*;

/// Publisher that keeps every call, in order
#[derive(Default)]
struct EventLog {
    events: Vec<String>,
}

impl Publisher for EventLog {
    fn publish(&mut self, mode: TravelMode, value: EstimateValue) {
        self.events.push(format!("{mode}={value}"));
    }

    fn publish_note(&mut self, note: Note) {
        self.events.push(format!("note={note}"));
    }

    fn publish_map(&mut self, map: &str) {
        self.events.push(format!("map={map}"));
    }

    fn publish_active(&mut self, id: DestinationId) {
        self.events.push(format!("active={id}"));
    }
}

fn clinics() -> Vec<Destination> {
    vec![
        Destination::new(0, "Centro", Coordinate::new(40.1, -3.0)).with_map("img/mapa-centro.png"),
        Destination::new(1, "Retiro", Coordinate::new(40.4153, -3.6845))
            .with_map("img/mapa-retiro.png"),
        Destination::new(2, "Vallecas", Coordinate::new(40.3919, -3.6588)),
    ]
}

fn visitor() -> Coordinate {
    Coordinate::new(40.0, -3.0)
}

fn new_controller() -> SelectionController<DisplayState> {
    SelectionController::new(clinics(), ModeProfiles::default(), DisplayState::default())
}

#[test]
fn selection_is_exclusive() {
    let mut controller = new_controller();

    for id in [2, 0, 1, 1] {
        let selected = controller.select_destination(id).unwrap();
        assert_eq!(selected.id, id);
        assert_eq!(controller.active(), Some(id));
        assert_eq!(controller.publisher().active, Some(id));
    }
}

#[test]
fn resolution_order_does_not_matter() {
    for id in 0..clinics().len() {
        let mut select_first = new_controller();
        select_first.select_destination(id).unwrap();
        select_first.on_position_resolved(visitor());

        let mut resolve_first = new_controller();
        resolve_first.on_position_resolved(visitor());
        resolve_first.select_destination(id).unwrap();

        assert_eq!(select_first.current_estimate(), resolve_first.current_estimate());
        assert_eq!(
            (
                select_first.publisher().walk,
                select_first.publisher().car,
                select_first.publisher().transit,
                select_first.publisher().note,
            ),
            (
                resolve_first.publisher().walk,
                resolve_first.publisher().car,
                resolve_first.publisher().transit,
                resolve_first.publisher().note,
            )
        );
    }
}

#[test]
fn selecting_without_position_shows_placeholders() {
    let mut controller = new_controller();
    controller.select_destination(1).unwrap();

    let state = controller.publisher();
    for mode in TravelMode::ALL {
        assert_eq!(state.value(mode).to_string(), PLACEHOLDER);
    }
    assert_eq!(state.note, Some(Note::EnableLocation));
}

#[test]
fn late_position_fills_in_the_active_estimate() {
    let mut controller = new_controller();
    assert!(controller.current_estimate().unwrap().is_unknown());

    controller.on_position_resolved(visitor());

    let state = controller.publisher();
    assert_eq!(state.walk, EstimateValue::Minutes(148));
    assert_eq!(state.car, EstimateValue::Minutes(29));
    assert_eq!(state.transit, EstimateValue::Minutes(56));
    assert_eq!(state.note, Some(Note::Approximate));
}

#[test]
fn switching_destination_never_shows_stale_values() {
    let mut controller = new_controller();
    controller.on_position_resolved(visitor());
    let centro = controller.publisher().clone();

    controller.select_destination(1).unwrap();
    let retiro = controller.publisher().clone();

    assert_ne!(centro.walk, retiro.walk);
    assert_eq!(
        Some(Estimate {
            walk: retiro.walk,
            car: retiro.car,
            transit: retiro.transit,
        }),
        controller.current_estimate()
    );
    assert_eq!(retiro.map.as_deref(), Some("img/mapa-retiro.png"));
}

#[test]
fn publish_sequence_for_a_click() {
    let mut controller =
        SelectionController::new(clinics(), ModeProfiles::default(), EventLog::default());
    controller.on_position_resolved(visitor());
    let log_len = controller.publisher().events.len();

    controller.select_destination(0).unwrap();

    let events = &controller.publisher().events[log_len..];
    assert_eq!(
        events,
        [
            "active=0",
            "map=img/mapa-centro.png",
            "walk=148",
            "car=29",
            "transit=56",
            "note=aprox. desde tu ubicación",
        ]
    );
}

#[test]
fn initial_load_does_not_swap_the_map() {
    let controller =
        SelectionController::new(clinics(), ModeProfiles::default(), EventLog::default());

    assert_eq!(
        controller.publisher().events,
        [
            "active=0",
            "walk=–",
            "car=–",
            "transit=–",
            "note=activa la ubicación para calcular",
        ]
    );
}

#[test]
fn publisher_can_be_borrowed() {
    let mut state = DisplayState::default();
    {
        let mut controller =
            SelectionController::new(clinics(), ModeProfiles::default(), &mut state);
        controller.on_position(Ok(visitor()));
    }
    assert_eq!(state.walk, EstimateValue::Minutes(148));
}
