//! Corpus MCP Tools
//!
//! Tools for adding, listing, reading and removing writing samples.

use super::{
    get_optional_string, get_optional_string_array, get_required_string, project_dir_property,
    ToolDefinition,
};
use crate::models::SampleSource;
use crate::services::corpus_service::{self, AddFileInput, AddTextInput};
use crate::Result;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// Get the tool definition for corpus_add
pub fn add_definition() -> ToolDefinition {
    ToolDefinition {
        name: "corpus_add".to_string(),
        description: "Add a writing sample to the corpus from a file path. Returns the sample ID."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["filePath"],
            "properties": {
                "projectDir": project_dir_property(),
                "filePath": {
                    "type": "string",
                    "description": "Absolute path to the file to ingest"
                },
                "title": {
                    "type": "string",
                    "description": "Optional title for the sample (defaults to the file name)"
                },
                "tags": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Optional tags for categorization"
                }
            }
        }),
    }
}

/// Execute the corpus_add tool
pub fn execute_add(args: &Value, project_root: &Path) -> Result<String> {
    let input = AddFileInput {
        file_path: PathBuf::from(get_required_string(args, "filePath")?),
        title: get_optional_string(args, "title"),
        tags: get_optional_string_array(args, "tags")?,
    };
    corpus_service::add_file(input, project_root)
}

/// Get the tool definition for corpus_add_text
pub fn add_text_definition() -> ToolDefinition {
    ToolDefinition {
        name: "corpus_add_text".to_string(),
        description: "Add a writing sample from raw text content. Use this for URL-fetched content or clipboard pastes."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["text", "title", "source"],
            "properties": {
                "projectDir": project_dir_property(),
                "text": {
                    "type": "string",
                    "description": "The text content to add as a sample"
                },
                "title": {
                    "type": "string",
                    "description": "Title for the sample"
                },
                "source": {
                    "type": "string",
                    "enum": ["url", "clipboard", "inline"],
                    "description": "Where this text came from"
                },
                "sourceUrl": {
                    "type": "string",
                    "description": "Source URL if applicable"
                },
                "tags": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Optional tags for categorization"
                }
            }
        }),
    }
}

/// Execute the corpus_add_text tool
pub fn execute_add_text(args: &Value, project_root: &Path) -> Result<String> {
    let source: SampleSource = get_required_string(args, "source")?.parse()?;
    if source == SampleSource::File {
        anyhow::bail!("Invalid source 'file' for raw text: use corpus_add to ingest a file");
    }

    let input = AddTextInput {
        text: get_required_string(args, "text")?,
        title: get_required_string(args, "title")?,
        source,
        source_url: get_optional_string(args, "sourceUrl"),
        tags: get_optional_string_array(args, "tags")?,
    };
    corpus_service::add_text(input, project_root)
}

/// Get the tool definition for corpus_list
pub fn list_definition() -> ToolDefinition {
    ToolDefinition {
        name: "corpus_list".to_string(),
        description: "List all writing samples in the corpus with metadata.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "projectDir": project_dir_property()
            }
        }),
    }
}

/// Execute the corpus_list tool
pub fn execute_list(_args: &Value, project_root: &Path) -> Result<String> {
    corpus_service::list_corpus(project_root)
}

/// Get the tool definition for corpus_get
pub fn get_definition() -> ToolDefinition {
    ToolDefinition {
        name: "corpus_get".to_string(),
        description: "Get the full text of a specific writing sample.".to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["sampleId"],
            "properties": {
                "projectDir": project_dir_property(),
                "sampleId": {
                    "type": "string",
                    "description": "The sample ID to retrieve"
                }
            }
        }),
    }
}

/// Execute the corpus_get tool
pub fn execute_get(args: &Value, project_root: &Path) -> Result<String> {
    let sample_id = get_required_string(args, "sampleId")?;
    corpus_service::get_sample(&sample_id, project_root)
}

/// Get the tool definition for corpus_remove
pub fn remove_definition() -> ToolDefinition {
    ToolDefinition {
        name: "corpus_remove".to_string(),
        description: "Remove a writing sample from the corpus.".to_string(),
        input_schema: json!({
            "type": "object",
            "required": ["sampleId"],
            "properties": {
                "projectDir": project_dir_property(),
                "sampleId": {
                    "type": "string",
                    "description": "The sample ID to remove"
                }
            }
        }),
    }
}

/// Execute the corpus_remove tool
pub fn execute_remove(args: &Value, project_root: &Path) -> Result<String> {
    let sample_id = get_required_string(args, "sampleId")?;
    corpus_service::remove_sample(&sample_id, project_root)
}

/// Get the tool definition for corpus_get_all
pub fn get_all_definition() -> ToolDefinition {
    ToolDefinition {
        name: "corpus_get_all".to_string(),
        description: "Get all writing samples concatenated for analysis. Use this when generating a voice profile."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "projectDir": project_dir_property()
            }
        }),
    }
}

/// Execute the corpus_get_all tool
pub fn execute_get_all(_args: &Value, project_root: &Path) -> Result<String> {
    corpus_service::get_all_samples(project_root)
}
