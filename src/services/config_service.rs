//! Config service - Business logic for `config.yaml`

use crate::models::ConfigUpdate;
use crate::paths::ProjectPaths;
use crate::store::{load_config_or_default, update_config, validate_voices};
use crate::Result;
use anyhow::Context;
use std::path::Path;

/// Current config as YAML (defaults when no file exists)
pub fn get_config(project_root: &Path) -> Result<String> {
    let paths = ProjectPaths::new(project_root);
    let config = load_config_or_default(&paths)?;
    serde_yaml::to_string(&config).context("Failed to serialize config")
}

/// Apply a partial update and persist it
///
/// A `voices` list that fails validation is reported and nothing is written.
pub fn save_config(update: ConfigUpdate, project_root: &Path) -> Result<String> {
    if let Some(voices) = &update.voices {
        if let Err(e) = validate_voices(voices) {
            return Ok(format!("Configuration not saved: {}", e));
        }
    }

    let paths = ProjectPaths::new(project_root);
    let config = update_config(&paths, update)?;
    let yaml = serde_yaml::to_string(&config).context("Failed to serialize config")?;

    Ok(format!("Configuration saved:\n{}", yaml))
}
