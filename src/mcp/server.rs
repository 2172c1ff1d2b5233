//! MCP Server implementation using JSON-RPC 2.0 over stdio
//!
//! Implements the minimal MCP protocol:
//! - `initialize` - Return server info and capabilities
//! - `tools/list` - Return available tool definitions
//! - `tools/call` - Execute a tool and return result
//! - `shutdown` - Acknowledge; the loop ends when stdin closes

use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::tools::ToolRegistry;

/// MCP Server for handling JSON-RPC requests over stdio
pub struct McpServer {
    tool_registry: ToolRegistry,
    project_root: PathBuf,
}

/// JSON-RPC 2.0 Request
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Option<Value>,
}

/// JSON-RPC 2.0 Response
#[derive(Debug, Serialize)]
struct JsonRpcResponse {
    jsonrpc: String,
    id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 Error
#[derive(Debug, Serialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

impl JsonRpcResponse {
    fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    fn failure(id: Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError { code, message }),
        }
    }
}

// JSON-RPC error codes
const PARSE_ERROR: i32 = -32700;
const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

impl McpServer {
    /// Create a server whose tools default to `project_root`
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            tool_registry: ToolRegistry::new(),
            project_root: project_root.into(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run the MCP server, reading from stdin and writing to stdout
    pub async fn run(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        let reader = BufReader::new(stdin.lock());

        tracing::info!(
            project_root = %self.project_root.display(),
            tools = self.tool_registry.len(),
            "interfluence MCP server started"
        );

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    tracing::error!("stdin read error: {}", e);
                    break;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(&line).await {
                writeln!(stdout, "{}", response)?;
                stdout.flush()?;
            }
        }

        tracing::info!("interfluence MCP server stopped");
        Ok(())
    }

    /// Handle one line of input, returning the serialized response if any
    ///
    /// Notifications (requests without an `id` under `notifications/`) get no reply.
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        let response = self.handle_request(line).await?;
        match serde_json::to_string(&response) {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::error!("failed to serialize response: {}", e);
                None
            }
        }
    }

    /// Handle a single JSON-RPC request
    async fn handle_request(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    PARSE_ERROR,
                    format!("Parse error: {}", e),
                ));
            }
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::failure(
                request.id.unwrap_or(Value::Null),
                INVALID_REQUEST,
                "Invalid JSON-RPC version".to_string(),
            ));
        }

        let is_notification = request.id.is_none()
            && (request.method == "initialized" || request.method.starts_with("notifications/"));
        if is_notification {
            tracing::debug!(method = %request.method, "notification received");
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);

        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(&request.params).await,
            "shutdown" => {
                tracing::info!("shutdown requested");
                Ok(json!({}))
            }
            _ => Err((
                METHOD_NOT_FOUND,
                format!("Method not found: {}", request.method),
            )),
        };

        Some(match result {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err((code, message)) => JsonRpcResponse::failure(id, code, message),
        })
    }

    /// Handle `initialize` request
    fn handle_initialize(&self) -> std::result::Result<Value, (i32, String)> {
        Ok(json!({
            "protocolVersion": "2024-11-05",
            "serverInfo": {
                "name": "interfluence",
                "version": env!("CARGO_PKG_VERSION")
            },
            "capabilities": {
                "tools": {}
            }
        }))
    }

    /// Handle `tools/list` request
    fn handle_tools_list(&self) -> std::result::Result<Value, (i32, String)> {
        let tools = self.tool_registry.list_tools();
        Ok(json!({ "tools": tools }))
    }

    /// Handle `tools/call` request
    async fn handle_tools_call(
        &self,
        params: &Option<Value>,
    ) -> std::result::Result<Value, (i32, String)> {
        let params = params
            .as_ref()
            .ok_or((INVALID_PARAMS, "Missing params".to_string()))?;

        let name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or((INVALID_PARAMS, "Missing tool name".to_string()))?;

        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        tracing::info!(tool = name, "tool call");

        match self
            .tool_registry
            .call_tool(name, &arguments, &self.project_root)
            .await
        {
            Ok(result) => Ok(json!({
                "content": [{
                    "type": "text",
                    "text": result
                }]
            })),
            Err(e) => {
                tracing::warn!(tool = name, "tool call failed: {:#}", e);
                Ok(json!({
                    "content": [{
                        "type": "text",
                        "text": format!("Error: {:#}", e)
                    }],
                    "isError": true
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn call(server: &McpServer, line: &str) -> Value {
        let response = server.handle_line(line).await.unwrap();
        serde_json::from_str(&response).unwrap()
    }

    #[test]
    fn test_parse_request() {
        let json = r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#;
        let request: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.method, "initialize");
        assert_eq!(request.jsonrpc, "2.0");
    }

    #[test]
    fn test_serialize_response() {
        let response = JsonRpcResponse::success(json!(1), json!({"status": "ok"}));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"result\""));
        assert!(!json.contains("\"error\""));
    }

    #[tokio::test]
    async fn test_initialize_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let server = McpServer::new(temp_dir.path());

        let response = call(
            &server,
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        )
        .await;
        assert_eq!(response["result"]["serverInfo"]["name"], "interfluence");

        let response = call(&server, r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#).await;
        assert_eq!(response["id"], 2);
        assert_eq!(response["result"]["tools"].as_array().unwrap().len(), 16);
    }

    #[tokio::test]
    async fn test_protocol_errors() {
        let temp_dir = TempDir::new().unwrap();
        let server = McpServer::new(temp_dir.path());

        let response = call(&server, "not json").await;
        assert_eq!(response["error"]["code"], PARSE_ERROR);

        let response = call(&server, r#"{"jsonrpc":"1.0","id":1,"method":"tools/list"}"#).await;
        assert_eq!(response["error"]["code"], INVALID_REQUEST);

        let response = call(&server, r#"{"jsonrpc":"2.0","id":1,"method":"bogus"}"#).await;
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);

        let response = call(&server, r#"{"jsonrpc":"2.0","id":1,"method":"tools/call"}"#).await;
        assert_eq!(response["error"]["code"], INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_notification_gets_no_reply() {
        let temp_dir = TempDir::new().unwrap();
        let server = McpServer::new(temp_dir.path());
        let line = r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#;
        assert!(server.handle_line(line).await.is_none());
    }

    #[tokio::test]
    async fn test_tool_call_uses_server_root() {
        let temp_dir = TempDir::new().unwrap();
        let server = McpServer::new(temp_dir.path());

        let request = json!({
            "jsonrpc": "2.0",
            "id": 3,
            "method": "tools/call",
            "params": {
                "name": "profile_save",
                "arguments": { "content": "# Base voice" }
            }
        });
        let response = call(&server, &request.to_string()).await;
        assert!(response["result"].get("isError").is_none());
        assert!(temp_dir.path().join(".interfluence/voice-profile.md").exists());
    }

    #[tokio::test]
    async fn test_tool_failure_sets_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let server = McpServer::new(temp_dir.path());

        let request = json!({
            "jsonrpc": "2.0",
            "id": 4,
            "method": "tools/call",
            "params": { "name": "corpus_get", "arguments": {} }
        });
        let response = call(&server, &request.to_string()).await;
        assert_eq!(response["result"]["isError"], true);
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("Error: Missing required field: sampleId"));

        let request = json!({
            "jsonrpc": "2.0",
            "id": 5,
            "method": "tools/call",
            "params": { "name": "no_such_tool", "arguments": {} }
        });
        let response = call(&server, &request.to_string()).await;
        assert_eq!(response["result"]["isError"], true);
    }
}
