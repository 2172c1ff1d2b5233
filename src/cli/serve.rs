//! serve CLI subcommand
//!
//! Starts the MCP server. The server communicates via JSON-RPC 2.0 over stdio.

use crate::mcp::McpServer;
use crate::Result;
use std::path::Path;

/// Run the MCP server rooted at `project_root`
pub async fn run(project_root: &Path) -> Result<()> {
    let server = McpServer::new(project_root);
    server.run().await
}
