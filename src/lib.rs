// interfluence - Voice profile tool server
// Keeps a writing-sample corpus, voice profiles and edit learnings per project,
// and picks which voice governs a file path.

pub mod cli;
pub mod error;
pub mod mcp;
pub mod models;
pub mod paths;
pub mod services;
pub mod store;
pub mod voice;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use error::{ConfigError, VoiceNameError};
pub use models::{ConfigUpdate, CorpusIndex, CorpusSample, InterfluenceConfig, Mode, VoiceConfig};
pub use paths::ProjectPaths;
pub use voice::{resolve_voice, ProfileTarget};
