//! `config.yaml` load, validation and read-modify-write

use crate::error::ConfigError;
use crate::models::{ConfigUpdate, InterfluenceConfig, VoiceConfig};
use crate::paths::ProjectPaths;
use crate::voice::{compile_pattern, validate_declared_name};
use crate::Result;
use anyhow::Context;
use std::collections::HashSet;

/// Load the persisted config; `None` when no file exists (or it is blank)
pub fn load_config(paths: &ProjectPaths) -> Result<Option<InterfluenceConfig>> {
    let config_path = paths.config()?;
    if !config_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&config_path).context("Failed to read config.yaml")?;
    if content.trim().is_empty() {
        return Ok(None);
    }

    let config = serde_yaml::from_str(&content).context("Failed to parse config.yaml")?;
    Ok(Some(config))
}

/// Persisted config, or the defaults. Never writes.
pub fn load_config_or_default(paths: &ProjectPaths) -> Result<InterfluenceConfig> {
    Ok(load_config(paths)?.unwrap_or_default())
}

pub fn save_config(paths: &ProjectPaths, config: &InterfluenceConfig) -> Result<()> {
    let config_path = paths.config()?;
    let content = serde_yaml::to_string(config).context("Failed to serialize config")?;
    std::fs::write(&config_path, content).context("Failed to write config.yaml")?;
    Ok(())
}

/// Overlay `update` on the current config and persist the result
pub fn update_config(paths: &ProjectPaths, update: ConfigUpdate) -> Result<InterfluenceConfig> {
    let mut config = load_config_or_default(paths)?;
    config.apply(update);
    save_config(paths, &config)?;
    tracing::debug!(mode = ?config.mode, voices = config.voices().len(), "saved config");
    Ok(config)
}

/// Check a voice list before it is persisted
pub fn validate_voices(voices: &[VoiceConfig]) -> std::result::Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for voice in voices {
        validate_declared_name(&voice.name)?;
        if !seen.insert(voice.name.as_str()) {
            return Err(ConfigError::DuplicateVoice(voice.name.clone()));
        }
        for pattern in &voice.apply_to {
            if let Err(e) = compile_pattern(pattern) {
                return Err(ConfigError::InvalidPattern {
                    voice: voice.name.clone(),
                    pattern: pattern.clone(),
                    reason: e.kind().to_string(),
                });
            }
        }
    }
    Ok(())
}
