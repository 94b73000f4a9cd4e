use std::path::Path;

use anyhow::Context;
use vetmap_core::EstimatorConfig;

/// Reads the estimator configuration from a TOML file
pub fn load_config(path: &Path) -> anyhow::Result<EstimatorConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    parse_config(&text).with_context(|| format!("Invalid config file '{}'", path.display()))
}

pub fn parse_config(text: &str) -> anyhow::Result<EstimatorConfig> {
    let config: EstimatorConfig = toml::from_str(text)?;
    tracing::debug!(
        destinations = config.destinations.len(),
        timeout_ms = config.geolocation.timeout_ms,
        "Parsed configuration"
    );
    Ok(config)
}
