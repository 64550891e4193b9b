//! YAML persistence for mute configurations
//!
//! Default location: `<config dir>/performer-mutes/mutes.yaml`. The loader
//! checks `schema_version` so a future structural change can refuse (or
//! later migrate) old files; no migration logic exists yet.

use crate::config::{MutesConfig, SCHEMA_VERSION};
use crate::MutesError;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Get the default config file path
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("performer-mutes")
        .join("mutes.yaml")
}

/// Parse a config from YAML and verify its schema version.
pub fn parse_config(contents: &str) -> anyhow::Result<MutesConfig> {
    let config: MutesConfig =
        serde_yaml::from_str(contents).context("Failed to parse mutes config YAML")?;

    if config.schema_version != SCHEMA_VERSION {
        return Err(MutesError::SchemaVersion {
            found: config.schema_version,
            expected: SCHEMA_VERSION,
        }
        .into());
    }

    Ok(config)
}

/// Load a mute configuration from a YAML file.
pub fn load_config(path: &Path) -> anyhow::Result<MutesConfig> {
    log::info!("load_config: Loading from {:?}", path);

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read mutes config file: {:?}", path))?;
    let config = parse_config(&contents)?;

    log::info!(
        "load_config: Loaded config with {} machine instance(s)",
        config.machines.len()
    );
    Ok(config)
}

/// Save a mute configuration to a YAML file.
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &MutesConfig, path: &Path) -> anyhow::Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize mutes config")?;
    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write mutes config file: {:?}", path))?;

    log::info!("save_config: Config saved");
    Ok(())
}
