//! Learnings MCP Tools

use super::{get_optional_string, get_required_string, project_dir_property, ToolDefinition};
use crate::services::learnings_service::{self, AppendLearningInput};
use crate::Result;
use serde_json::{json, Value};
use std::path::Path;

/// Get the tool definition for learnings_append
pub fn append_definition() -> ToolDefinition {
    ToolDefinition {
        name: "learnings_append".to_string(),
        description: "Append a learning from a user edit to the raw learnings log.".to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["filePath", "diff"],
            "properties": {
                "projectDir": project_dir_property(),
                "filePath": {
                    "type": "string",
                    "description": "File that was edited"
                },
                "diff": {
                    "type": "string",
                    "description": "The edit diff or description of changes"
                },
                "timestamp": {
                    "type": "string",
                    "description": "ISO 8601 timestamp (defaults to now)"
                }
            }
        }),
    }
}

/// Execute the learnings_append tool
pub fn execute_append(args: &Value, project_root: &Path) -> Result<String> {
    let input = AppendLearningInput {
        file_path: get_required_string(args, "filePath")?,
        diff: get_required_string(args, "diff")?,
        timestamp: get_optional_string(args, "timestamp"),
    };
    learnings_service::append_learning(input, project_root)
}

/// Get the tool definition for learnings_get_raw
pub fn get_raw_definition() -> ToolDefinition {
    ToolDefinition {
        name: "learnings_get_raw".to_string(),
        description: "Get all raw (unprocessed) learnings from the log.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "projectDir": project_dir_property()
            }
        }),
    }
}

/// Execute the learnings_get_raw tool
pub fn execute_get_raw(_args: &Value, project_root: &Path) -> Result<String> {
    learnings_service::get_raw_learnings(project_root)
}

/// Get the tool definition for learnings_clear_raw
pub fn clear_raw_definition() -> ToolDefinition {
    ToolDefinition {
        name: "learnings_clear_raw".to_string(),
        description: "Clear the raw learnings log after they have been folded into the profile."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "projectDir": project_dir_property()
            }
        }),
    }
}

/// Execute the learnings_clear_raw tool
pub fn execute_clear_raw(_args: &Value, project_root: &Path) -> Result<String> {
    learnings_service::clear_raw_learnings(project_root)
}

/// Get the tool definition for learnings_get
pub fn get_definition() -> ToolDefinition {
    ToolDefinition {
        name: "learnings_get".to_string(),
        description: "Get the processed learnings document.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "projectDir": project_dir_property()
            }
        }),
    }
}

/// Execute the learnings_get tool
pub fn execute_get(_args: &Value, project_root: &Path) -> Result<String> {
    learnings_service::get_learnings(project_root)
}
