//! Configuration MCP Tools

use super::{project_dir_property, ToolDefinition};
use crate::models::ConfigUpdate;
use crate::services::config_service;
use crate::Result;
use anyhow::Context;
use serde_json::{json, Value};
use std::path::Path;

/// Get the tool definition for config_get
pub fn get_definition() -> ToolDefinition {
    ToolDefinition {
        name: "config_get".to_string(),
        description: "Get the current interfluence configuration.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "projectDir": project_dir_property()
            }
        }),
    }
}

/// Execute the config_get tool
pub fn execute_get(_args: &Value, project_root: &Path) -> Result<String> {
    config_service::get_config(project_root)
}

/// Get the tool definition for config_save
pub fn save_definition() -> ToolDefinition {
    ToolDefinition {
        name: "config_save".to_string(),
        description: "Update interfluence configuration. Only the fields provided are changed; voices replaces the whole list."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "projectDir": project_dir_property(),
                "mode": {
                    "type": "string",
                    "enum": ["auto", "manual"],
                    "description": "auto: apply voice to matching files automatically. manual: only on explicit request."
                },
                "autoApplyTo": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Glob patterns for files to auto-apply voice to"
                },
                "exclude": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Glob patterns for files to never auto-apply to"
                },
                "learnFromEdits": {
                    "type": "boolean",
                    "description": "Whether to log manual edits as learnings"
                },
                "voices": {
                    "type": "array",
                    "description": "Ordered voice list; the first voice with a matching pattern wins",
                    "items": {
                        "type": "object",
                        "required": ["name", "applyTo"],
                        "properties": {
                            "name": { "type": "string" },
                            "applyTo": {
                                "type": "array",
                                "items": { "type": "string" }
                            }
                        }
                    }
                }
            }
        }),
    }
}

/// Execute the config_save tool
pub fn execute_save(args: &Value, project_root: &Path) -> Result<String> {
    let update: ConfigUpdate =
        serde_json::from_value(args.clone()).context("Invalid config_save arguments")?;
    config_service::save_config(update, project_root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let temp_dir = TempDir::new().unwrap();
        let project_root = temp_dir.path();

        execute_save(&json!({ "mode": "auto" }), project_root).unwrap();
        execute_save(&json!({ "learnFromEdits": false }), project_root).unwrap();

        let result = execute_get(&json!({}), project_root).unwrap();
        assert!(result.contains("mode: auto"));
        assert!(result.contains("learnFromEdits: false"));
    }

    #[test]
    fn test_save_voices_with_project_dir_arg() {
        let temp_dir = TempDir::new().unwrap();
        let args = json!({
            "projectDir": temp_dir.path().to_string_lossy(),
            "voices": [
                { "name": "blog", "applyTo": ["posts/**"] },
                { "name": "docs", "applyTo": ["docs/**", "README.md"] }
            ]
        });
        let result = execute_save(&args, temp_dir.path()).unwrap();
        assert!(result.contains("name: blog"));
        assert!(result.contains("name: docs"));
    }

    #[test]
    fn test_duplicate_voices_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let args = json!({
            "voices": [
                { "name": "blog", "applyTo": ["a/**"] },
                { "name": "blog", "applyTo": ["b/**"] }
            ]
        });
        let result = execute_save(&args, temp_dir.path()).unwrap();
        assert!(result.starts_with("Configuration not saved:"));
    }

    #[test]
    fn test_bad_mode_is_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(execute_save(&json!({ "mode": "sometimes" }), temp_dir.path()).is_err());
    }
}
