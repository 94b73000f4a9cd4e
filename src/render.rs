use std::fmt::{self, Write};

use comfy_table::{Table, presets::UTF8_FULL};
use serde::Serialize;
use vetmap_core::prelude::*;

/// Text block for the active clinic, one line per output field
pub fn render_state(destination: Option<&Destination>, state: &DisplayState) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    write_state(&mut out, destination, state).ok();
    out
}

fn write_state(
    out: &mut impl Write,
    destination: Option<&Destination>,
    state: &DisplayState,
) -> fmt::Result {
    match destination {
        Some(destination) => writeln!(out, "{} {}", destination.name, destination.coordinate)?,
        None => writeln!(out, "(no clinic selected)")?,
    }

    for mode in TravelMode::ALL {
        let value = state.value(mode);
        let unit = if value.is_unknown() { "" } else { " min" };
        writeln!(out, "  {mode:<8} {value}{unit}")?;
    }
    if let Some(note) = state.note {
        writeln!(out, "  {note}")?;
    }
    if let Some(map) = &state.map {
        writeln!(out, "  map: {map}")?;
    }

    Ok(())
}

#[derive(Serialize)]
struct Report<'a> {
    destination: Option<&'a str>,
    #[serde(flatten)]
    state: &'a DisplayState,
}

pub fn render_json(
    destination: Option<&Destination>,
    state: &DisplayState,
) -> anyhow::Result<String> {
    let report = Report {
        destination: destination.map(|d| d.name.as_str()),
        state,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Overview table of every clinic
pub fn render_table(rows: &[DestinationEstimate], active: Option<DestinationId>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "#", "Clinic", "Distance, km", "Walk", "Car", "Transit",
    ]);

    for row in rows {
        let marker = if Some(row.id) == active { "*" } else { "" };
        let distance = row
            .distance_km
            .filter(|d| d.is_finite())
            .map_or_else(|| PLACEHOLDER.to_string(), |d| format!("{d:.2}"));

        table.add_row(vec![
            format!("{}{marker}", row.id),
            row.name.clone(),
            distance,
            row.estimate.walk.to_string(),
            row.estimate.car.to_string(),
            row.estimate.transit.to_string(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centro() -> Destination {
        Destination::new(0, "Centro", Coordinate::new(40.1, -3.0))
    }

    #[test]
    fn placeholders_have_no_unit() {
        let text = render_state(Some(&centro()), &DisplayState::default());
        assert!(text.contains("walk     –\n"));
        assert!(!text.contains("– min"));
    }

    #[test]
    fn minutes_and_note() {
        let mut state = DisplayState::default();
        state.publish(TravelMode::Car, EstimateValue::Minutes(29));
        state.publish_note(Note::Approximate);
        state.publish_map("img/mapa-centro.png");

        let text = render_state(Some(&centro()), &state);
        assert!(text.starts_with("Centro (40.10000, -3.00000)"));
        assert!(text.contains("car      29 min"));
        assert!(text.contains("aprox. desde tu ubicación"));
        assert!(text.contains("map: img/mapa-centro.png"));
    }

    #[test]
    fn json_report_flattens_state() {
        let mut state = DisplayState::default();
        state.publish(TravelMode::Walk, EstimateValue::Minutes(148));
        state.publish_active(0);

        let json: serde_json::Value =
            serde_json::from_str(&render_json(Some(&centro()), &state).unwrap()).unwrap();
        assert_eq!(json["destination"], "Centro");
        assert_eq!(json["walk"], 148);
        assert_eq!(json["transit"], "–");
        assert_eq!(json["active"], 0);
    }

    #[test]
    fn table_marks_active_row() {
        let rows = vec![
            DestinationEstimate {
                id: 0,
                name: "Centro".to_string(),
                distance_km: Some(11.119),
                estimate: Estimate::from_distance(11.119, &ModeProfiles::default()),
            },
            DestinationEstimate {
                id: 1,
                name: "Norte".to_string(),
                distance_km: None,
                estimate: Estimate::unknown(),
            },
        ];

        let text = render_table(&rows, Some(0)).to_string();
        assert!(text.contains("0*"));
        assert!(text.contains("11.12"));
        assert!(text.contains("148"));
        assert!(text.contains("Norte"));
    }
}
