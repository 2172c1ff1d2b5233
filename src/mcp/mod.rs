//! MCP (Model Context Protocol) Server for interfluence
//!
//! Exposes the corpus, voice profiles, configuration and learnings log as
//! tools over JSON-RPC on stdio.
//!
//! ## Tools
//! - `corpus_*` - Add, list, read and remove writing samples
//! - `profile_*` / `voice_resolve` - Voice profiles and per-path voice selection
//! - `config_get` / `config_save` - Project configuration
//! - `learnings_*` - Edit observations log

pub mod server;
pub mod tools;

pub use server::McpServer;
pub use tools::ToolRegistry;
