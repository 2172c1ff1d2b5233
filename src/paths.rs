//! Path resolution for the per-project `.interfluence/` directory
//!
//! Every file the server touches lives under this directory. Accessors that
//! return a directory create it first; accessors that return a file path only
//! make sure the parent exists. Nothing is cached, so call order never matters.

use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Name of the hidden project directory
pub const INTERFLUENCE_DIR: &str = ".interfluence";

const CORPUS_DIR: &str = "corpus";
const CORPUS_INDEX_FILE: &str = "corpus-index.yaml";
const BASE_PROFILE_FILE: &str = "voice-profile.md";
const VOICES_DIR: &str = "voices";
const CONFIG_FILE: &str = "config.yaml";
const LEARNINGS_RAW_FILE: &str = "learnings-raw.log";
const LEARNINGS_FILE: &str = "learnings.md";

/// Canonical locations for one project
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    project_dir: PathBuf,
}

impl ProjectPaths {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// `.interfluence/`, created on demand
    pub fn root(&self) -> Result<PathBuf> {
        ensure_dir(self.project_dir.join(INTERFLUENCE_DIR))
    }

    /// `.interfluence/corpus/`, created on demand
    pub fn corpus_dir(&self) -> Result<PathBuf> {
        ensure_dir(self.root()?.join(CORPUS_DIR))
    }

    pub fn corpus_index(&self) -> Result<PathBuf> {
        Ok(self.root()?.join(CORPUS_INDEX_FILE))
    }

    pub fn base_profile(&self) -> Result<PathBuf> {
        Ok(self.root()?.join(BASE_PROFILE_FILE))
    }

    /// `.interfluence/voices/`, created on demand
    pub fn voices_dir(&self) -> Result<PathBuf> {
        ensure_dir(self.root()?.join(VOICES_DIR))
    }

    /// `.interfluence/voices/{name}.md`
    ///
    /// The name is not validated here; user-supplied names go through
    /// [`crate::voice::ProfileTarget::parse`] first.
    pub fn voice_profile(&self, name: &str) -> Result<PathBuf> {
        Ok(self.voices_dir()?.join(format!("{}.md", name)))
    }

    pub fn config(&self) -> Result<PathBuf> {
        Ok(self.root()?.join(CONFIG_FILE))
    }

    pub fn learnings_raw(&self) -> Result<PathBuf> {
        Ok(self.root()?.join(LEARNINGS_RAW_FILE))
    }

    pub fn learnings(&self) -> Result<PathBuf> {
        Ok(self.root()?.join(LEARNINGS_FILE))
    }
}

fn ensure_dir(dir: PathBuf) -> Result<PathBuf> {
    if !dir.is_dir() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        tracing::debug!(dir = %dir.display(), "created directory");
    }
    Ok(dir)
}
