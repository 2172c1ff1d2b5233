//! File-backed persistence for `.interfluence/`
//!
//! Every operation is a full read-modify-write with no locking; callers are
//! expected to serialize access per project.

pub mod config;
pub mod corpus;
pub mod learnings;

pub use config::{load_config, load_config_or_default, save_config, update_config, validate_voices};
pub use corpus::{CorpusStore, NewSample};
pub use learnings::{
    append_learning, clear_raw_learnings, read_processed_learnings, read_raw_learnings,
};
