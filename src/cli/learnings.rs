//! Learnings CLI commands

use crate::services::learnings_service;
use crate::Result;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum LearningsCommands {
    /// Print the raw (unprocessed) learnings log
    GetRaw,

    /// Print the processed learnings document
    Get,

    /// Clear the raw learnings log
    ClearRaw,
}

pub fn run(cmd: LearningsCommands, project_root: &Path) -> Result<()> {
    let result = match cmd {
        LearningsCommands::GetRaw => learnings_service::get_raw_learnings(project_root)?,
        LearningsCommands::Get => learnings_service::get_learnings(project_root)?,
        LearningsCommands::ClearRaw => learnings_service::clear_raw_learnings(project_root)?,
    };
    println!("{}", result);
    Ok(())
}
