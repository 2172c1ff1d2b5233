//! Voice profile MCP Tools

use super::{get_optional_string, get_required_string, project_dir_property, ToolDefinition};
use crate::services::profile_service;
use crate::Result;
use serde_json::{json, Value};
use std::path::Path;

fn voice_property() -> Value {
    json!({
        "type": "string",
        "description": "Voice name (omit or use \"base\" for the base profile)"
    })
}

/// Get the tool definition for profile_get
pub fn get_definition() -> ToolDefinition {
    ToolDefinition {
        name: "profile_get".to_string(),
        description: "Get a voice profile. Omit voice (or pass \"base\") for the base profile."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "projectDir": project_dir_property(),
                "voice": voice_property()
            }
        }),
    }
}

/// Execute the profile_get tool
pub fn execute_get(args: &Value, project_root: &Path) -> Result<String> {
    let voice = get_optional_string(args, "voice");
    profile_service::get_profile(voice.as_deref(), project_root)
}

/// Get the tool definition for profile_save
pub fn save_definition() -> ToolDefinition {
    ToolDefinition {
        name: "profile_save".to_string(),
        description: "Save or update a voice profile. The profile is prose describing the writing style."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["content"],
            "properties": {
                "projectDir": project_dir_property(),
                "content": {
                    "type": "string",
                    "description": "The full voice profile markdown content"
                },
                "voice": voice_property()
            }
        }),
    }
}

/// Execute the profile_save tool
pub fn execute_save(args: &Value, project_root: &Path) -> Result<String> {
    let content = get_required_string(args, "content")?;
    let voice = get_optional_string(args, "voice");
    profile_service::save_profile(&content, voice.as_deref(), project_root)
}

/// Get the tool definition for profile_list
pub fn list_definition() -> ToolDefinition {
    ToolDefinition {
        name: "profile_list".to_string(),
        description: "List the base profile and every voice profile, with configured patterns and consistency warnings."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "projectDir": project_dir_property()
            }
        }),
    }
}

/// Execute the profile_list tool
pub fn execute_list(_args: &Value, project_root: &Path) -> Result<String> {
    profile_service::list_profiles(project_root)
}

/// Get the tool definition for voice_resolve
pub fn resolve_definition() -> ToolDefinition {
    ToolDefinition {
        name: "voice_resolve".to_string(),
        description: "Determine which voice applies to a file path, using first-match-wins over configured voices."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["filePath"],
            "properties": {
                "projectDir": project_dir_property(),
                "filePath": {
                    "type": "string",
                    "description": "File path relative to the project root"
                }
            }
        }),
    }
}

/// Execute the voice_resolve tool
pub fn execute_resolve(args: &Value, project_root: &Path) -> Result<String> {
    let file_path = get_required_string(args, "filePath")?;
    profile_service::resolve_for_path(&file_path, project_root)
}
