//! Domain errors
//!
//! These are rejections of caller input. The service layer turns them into
//! plain-text results instead of propagating them as failures.

/// Reasons a voice name fails the naming grammar
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoiceNameError {
    #[error("Voice name '{0}' is too short (minimum 2 characters)")]
    TooShort(String),

    #[error("Voice name '{0}' is too long (maximum 32 characters)")]
    TooLong(String),

    #[error("Voice name '{name}' contains invalid character '{ch}' (allowed: a-z, 0-9, '-')")]
    InvalidCharacter { name: String, ch: char },

    #[error("Voice name '{0}' must start and end with a letter or digit")]
    HyphenBoundary(String),

    #[error("Voice name 'base' is reserved for the base profile")]
    Reserved,
}

/// Reasons a config update is refused before anything is written
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    InvalidVoiceName(#[from] VoiceNameError),

    #[error("Voice '{0}' is declared more than once")]
    DuplicateVoice(String),

    #[error("Voice '{voice}' has an invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        voice: String,
        pattern: String,
        reason: String,
    },
}
