//! Project configuration for `config.yaml`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether voice profiles are applied automatically
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Auto,
    #[default]
    Manual,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Auto => write!(f, "auto"),
            Mode::Manual => write!(f, "manual"),
        }
    }
}

/// A named voice and the paths it governs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    pub name: String,

    /// Glob patterns, checked in order
    #[serde(default)]
    pub apply_to: Vec<String>,
}

impl VoiceConfig {
    pub fn new(name: impl Into<String>, apply_to: &[&str]) -> Self {
        Self {
            name: name.into(),
            apply_to: apply_to.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Persisted configuration document
///
/// Missing fields take their defaults; fields of the wrong type are a decode error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct InterfluenceConfig {
    pub mode: Mode,
    pub auto_apply_to: Vec<String>,
    pub exclude: Vec<String>,
    pub learn_from_edits: bool,

    /// Voice priority list; earlier entries win
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voices: Option<Vec<VoiceConfig>>,
}

impl Default for InterfluenceConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Manual,
            auto_apply_to: vec![
                "*.md".to_string(),
                "CHANGELOG*".to_string(),
                "docs/**".to_string(),
            ],
            exclude: vec![
                "CLAUDE.md".to_string(),
                "AGENTS.md".to_string(),
                ".interfluence/**".to_string(),
            ],
            learn_from_edits: true,
            voices: None,
        }
    }
}

impl InterfluenceConfig {
    /// Configured voices, or an empty slice when none are declared
    pub fn voices(&self) -> &[VoiceConfig] {
        self.voices.as_deref().unwrap_or(&[])
    }

    /// Overlay the fields present in `update`
    ///
    /// `voices` replaces the whole list; entries are never merged.
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(mode) = update.mode {
            self.mode = mode;
        }
        if let Some(auto_apply_to) = update.auto_apply_to {
            self.auto_apply_to = auto_apply_to;
        }
        if let Some(exclude) = update.exclude {
            self.exclude = exclude;
        }
        if let Some(learn_from_edits) = update.learn_from_edits {
            self.learn_from_edits = learn_from_edits;
        }
        if let Some(voices) = update.voices {
            self.voices = Some(voices);
        }
    }
}

/// Partial update: `None` leaves a field unchanged, `Some(vec![])` clears it
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdate {
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub auto_apply_to: Option<Vec<String>>,
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
    #[serde(default)]
    pub learn_from_edits: Option<bool>,
    #[serde(default)]
    pub voices: Option<Vec<VoiceConfig>>,
}
