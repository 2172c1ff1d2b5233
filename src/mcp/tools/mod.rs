//! MCP Tool Registry and Implementations
//!
//! Each tool parses its JSON arguments and delegates to the service layer.
//! Every tool accepts an optional `projectDir`; when omitted the server's
//! project root is used.

pub mod config;
pub mod corpus;
pub mod learnings;
pub mod profile;

use crate::Result;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// Registry of available MCP tools
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
}

/// Tool definition for MCP protocol
#[derive(Clone)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

impl ToolRegistry {
    /// Create a new tool registry with all available tools
    pub fn new() -> Self {
        Self {
            tools: vec![
                corpus::add_definition(),
                corpus::add_text_definition(),
                corpus::list_definition(),
                corpus::get_definition(),
                corpus::remove_definition(),
                corpus::get_all_definition(),
                profile::get_definition(),
                profile::save_definition(),
                profile::list_definition(),
                profile::resolve_definition(),
                config::get_definition(),
                config::save_definition(),
                learnings::append_definition(),
                learnings::get_raw_definition(),
                learnings::clear_raw_definition(),
                learnings::get_definition(),
            ],
        }
    }

    /// List all available tools in MCP format
    pub fn list_tools(&self) -> Vec<Value> {
        self.tools
            .iter()
            .map(|t| {
                json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Call a tool by name with the given arguments
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: &Value,
        default_root: &Path,
    ) -> Result<String> {
        let project_root = project_dir(arguments, default_root);
        let project_root = project_root.as_path();

        match name {
            "corpus_add" => corpus::execute_add(arguments, project_root),
            "corpus_add_text" => corpus::execute_add_text(arguments, project_root),
            "corpus_list" => corpus::execute_list(arguments, project_root),
            "corpus_get" => corpus::execute_get(arguments, project_root),
            "corpus_remove" => corpus::execute_remove(arguments, project_root),
            "corpus_get_all" => corpus::execute_get_all(arguments, project_root),
            "profile_get" => profile::execute_get(arguments, project_root),
            "profile_save" => profile::execute_save(arguments, project_root),
            "profile_list" => profile::execute_list(arguments, project_root),
            "voice_resolve" => profile::execute_resolve(arguments, project_root),
            "config_get" => config::execute_get(arguments, project_root),
            "config_save" => config::execute_save(arguments, project_root),
            "learnings_append" => learnings::execute_append(arguments, project_root),
            "learnings_get_raw" => learnings::execute_get_raw(arguments, project_root),
            "learnings_clear_raw" => learnings::execute_clear_raw(arguments, project_root),
            "learnings_get" => learnings::execute_get(arguments, project_root),
            _ => anyhow::bail!("Unknown tool: {}", name),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON schema fragment shared by every tool
pub fn project_dir_property() -> Value {
    json!({
        "type": "string",
        "description": "Absolute path to the project directory (defaults to the server's project)"
    })
}

/// Resolve the project directory for a call
pub fn project_dir(args: &Value, default_root: &Path) -> PathBuf {
    get_optional_string(args, "projectDir")
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| default_root.to_path_buf())
}

/// Helper to extract a required string field from JSON
pub fn get_required_string(args: &Value, field: &str) -> Result<String> {
    args.get(field)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| anyhow::anyhow!("Missing required field: {}", field))
}

/// Helper to extract an optional string field from JSON
pub fn get_optional_string(args: &Value, field: &str) -> Option<String> {
    args.get(field).and_then(|v| v.as_str()).map(|s| s.to_string())
}

/// Helper to extract an optional array of strings from JSON
pub fn get_optional_string_array(args: &Value, field: &str) -> Result<Option<Vec<String>>> {
    let Some(value) = args.get(field).filter(|v| !v.is_null()) else {
        return Ok(None);
    };

    let array = value
        .as_array()
        .ok_or_else(|| anyhow::anyhow!("Field '{}' must be an array of strings", field))?;

    array
        .iter()
        .map(|v| {
            v.as_str()
                .map(|s| s.to_string())
                .ok_or_else(|| anyhow::anyhow!("Field '{}' must be an array of strings", field))
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}
