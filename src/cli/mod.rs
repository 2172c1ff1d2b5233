//! CLI subcommands
//!
//! Operator-facing mirrors of the MCP tools. Each command resolves the project
//! directory, calls the service layer and prints its text result.

pub mod config;
pub mod corpus;
pub mod learnings;
pub mod serve;
pub mod voice;

use crate::Result;
use std::path::PathBuf;

/// Resolve the project directory from `--project-dir` or the current directory
pub fn resolve_project_dir(project_dir: Option<PathBuf>) -> Result<PathBuf> {
    match project_dir {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}
