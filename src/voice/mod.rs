//! Voice resolution engine
//!
//! Decides which voice profile governs a file path, maps voice names to
//! profile files, and reports mismatches between config and disk.
//!
//! - `name` - voice name grammar
//! - `resolver` - first-match-wins path resolution
//! - `profile` - profile targets and on-disk discovery
//! - `reconcile` - config/disk reconciliation warnings

pub mod name;
pub mod profile;
pub mod reconcile;
pub mod resolver;

pub use name::{is_valid_voice_name, validate_declared_name, validate_voice_name, BASE_VOICE};
pub use profile::{list_voice_profiles, ProfileTarget};
pub use reconcile::{reconcile, ReconcileWarning};
pub use resolver::{
    auto_applies, compile_pattern, matches_any, resolve_voice, PatternSet, VoiceResolver,
};
