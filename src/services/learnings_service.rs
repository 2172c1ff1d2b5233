//! Learnings service - Edit observations captured for later profile refinement

use crate::paths::ProjectPaths;
use crate::store;
use crate::Result;
use std::path::Path;

const NO_LEARNINGS: &str = "No learnings recorded yet.";

/// Input for appending a learning entry
#[derive(Debug)]
pub struct AppendLearningInput {
    pub file_path: String,
    pub diff: String,
    pub timestamp: Option<String>,
}

pub fn append_learning(input: AppendLearningInput, project_root: &Path) -> Result<String> {
    let paths = ProjectPaths::new(project_root);
    store::append_learning(&paths, &input.file_path, &input.diff, input.timestamp.as_deref())?;
    Ok(format!("Learning logged from edit to {}", input.file_path))
}

pub fn get_raw_learnings(project_root: &Path) -> Result<String> {
    let paths = ProjectPaths::new(project_root);
    Ok(store::read_raw_learnings(&paths)?.unwrap_or_else(|| NO_LEARNINGS.to_string()))
}

pub fn clear_raw_learnings(project_root: &Path) -> Result<String> {
    let paths = ProjectPaths::new(project_root);
    store::clear_raw_learnings(&paths)?;
    Ok("Raw learnings log cleared.".to_string())
}

pub fn get_learnings(project_root: &Path) -> Result<String> {
    let paths = ProjectPaths::new(project_root);
    Ok(store::read_processed_learnings(&paths)?
        .unwrap_or_else(|| "No processed learnings yet.".to_string()))
}
