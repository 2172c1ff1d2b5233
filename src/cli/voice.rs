//! Voice CLI commands

use crate::services::profile_service;
use crate::Result;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand)]
pub enum VoiceCommands {
    /// Show which voice governs a file path
    Resolve {
        /// File path relative to the project root (e.g., "docs/guide.md")
        path: String,
    },

    /// List the base profile and all voice profiles
    List,

    /// Print a voice profile (base when no name is given)
    Show {
        /// Voice name
        name: Option<String>,
    },
}

pub fn run(cmd: VoiceCommands, project_root: &Path) -> Result<()> {
    let result = match cmd {
        VoiceCommands::Resolve { path } => profile_service::resolve_for_path(&path, project_root)?,
        VoiceCommands::List => profile_service::list_profiles(project_root)?,
        VoiceCommands::Show { name } => profile_service::get_profile(name.as_deref(), project_root)?,
    };
    println!("{}", result);
    Ok(())
}
