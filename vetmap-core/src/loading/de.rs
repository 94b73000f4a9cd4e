use serde::Deserialize;

/// Parses degrees the way a browser reads a numeric data attribute.
///
/// Leading whitespace is skipped and the longest numeric prefix wins, so
/// `"40.41 N"` reads as `40.41`. Text without a numeric prefix gives NaN.
pub fn parse_degrees(text: &str) -> f64 {
    let text = text.trim_start();
    let candidate_len = text
        .find(|c: char| !matches!(c, '0'..='9' | '+' | '-' | '.' | 'e' | 'E'))
        .unwrap_or(text.len());

    (1..=candidate_len)
        .rev()
        .find_map(|len| text[..len].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Degrees {
    Number(f64),
    Text(String),
}

pub(super) fn deserialize_degrees<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let degrees = match Degrees::deserialize(deserializer)? {
        Degrees::Number(value) => value,
        Degrees::Text(text) => {
            let value = parse_degrees(&text);
            if value.is_nan() {
                log::warn!("Coordinate '{text}' is not a number, estimates will be unknown");
            }
            value
        }
    };
    Ok(degrees)
}
