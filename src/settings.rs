use anyhow::{Context, Result};
use avsin_experiment::EngineConfig;
use std::fs;
use std::path::Path;
use tracing::info;

/// Reads engine settings from a JSON file. Fields the file omits keep their defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<EngineConfig> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let config: EngineConfig = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
    info!(path = %path.display(), ?config, "engine settings loaded");
    Ok(config)
}
