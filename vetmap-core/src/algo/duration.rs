use crate::{EstimateValue, ModeProfile};

/// Projects a distance onto a travel mode as whole minutes.
///
/// `round(distance / speed * 60 + buffer)`, never below one minute. Negative or
/// non-finite distances cannot be projected and give [`EstimateValue::Unknown`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn project_minutes(distance_km: f64, profile: &ModeProfile) -> EstimateValue {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return EstimateValue::Unknown;
    }

    let minutes = (distance_km / profile.speed_kmh * 60.0 + profile.buffer_min).round();
    if !minutes.is_finite() {
        return EstimateValue::Unknown;
    }

    EstimateValue::Minutes(minutes.max(1.0) as u32)
}
