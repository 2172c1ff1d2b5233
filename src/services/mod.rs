//! Service layer for interfluence
//!
//! Business logic shared by MCP tools and CLI commands. Every function returns
//! the human-readable text result for its operation. Conditions such as a
//! missing sample or an invalid voice name come back as `Ok` text; only I/O
//! and decode failures are errors.

pub mod config_service;
pub mod corpus_service;
pub mod learnings_service;
pub mod profile_service;

// Re-export commonly used types
pub use config_service::{get_config, save_config};
pub use corpus_service::{
    add_file, add_text, get_all_samples, get_sample, list_corpus, remove_sample, AddFileInput,
    AddTextInput,
};
pub use learnings_service::{
    append_learning, clear_raw_learnings, get_learnings, get_raw_learnings, AppendLearningInput,
};
pub use profile_service::{get_profile, list_profiles, resolve_for_path, save_profile};
