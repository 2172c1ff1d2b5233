//! Config CLI commands

use crate::services::config_service;
use crate::Result;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the current configuration (defaults when no config.yaml exists)
    Get,
}

pub fn run(cmd: ConfigCommands, project_root: &Path) -> Result<()> {
    match cmd {
        ConfigCommands::Get => {
            let result = config_service::get_config(project_root)?;
            print!("{}", result);
        }
    }
    Ok(())
}
