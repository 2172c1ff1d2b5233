//! Voice name grammar: 2-32 chars of `[a-z0-9-]`, no leading or trailing hyphen

use crate::error::VoiceNameError;

/// Reserved name addressing the base profile
pub const BASE_VOICE: &str = "base";

const MIN_LEN: usize = 2;
const MAX_LEN: usize = 32;

/// Check a name against the voice name grammar
///
/// `base` passes this check; use [`validate_declared_name`] where the reserved
/// name must be refused.
pub fn validate_voice_name(name: &str) -> Result<(), VoiceNameError> {
    let len = name.chars().count();
    if len < MIN_LEN {
        return Err(VoiceNameError::TooShort(name.to_string()));
    }
    if len > MAX_LEN {
        return Err(VoiceNameError::TooLong(name.to_string()));
    }

    if let Some(ch) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(VoiceNameError::InvalidCharacter {
            name: name.to_string(),
            ch,
        });
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(VoiceNameError::HyphenBoundary(name.to_string()));
    }

    Ok(())
}

/// Validate a name declared in the config's voice list
pub fn validate_declared_name(name: &str) -> Result<(), VoiceNameError> {
    if name == BASE_VOICE {
        return Err(VoiceNameError::Reserved);
    }
    validate_voice_name(name)
}

pub fn is_valid_voice_name(name: &str) -> bool {
    validate_voice_name(name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(is_valid_voice_name("ab"));
        assert!(is_valid_voice_name("a-b-c"));
        assert!(is_valid_voice_name("blog"));
        assert!(is_valid_voice_name("v2"));
        assert!(is_valid_voice_name(&"a1".repeat(16)));
    }

    #[test]
    fn test_invalid_names() {
        assert_eq!(
            validate_voice_name("A"),
            Err(VoiceNameError::TooShort("A".to_string()))
        );
        assert_eq!(
            validate_voice_name("a"),
            Err(VoiceNameError::TooShort("a".to_string()))
        );
        assert_eq!(
            validate_voice_name("-ab"),
            Err(VoiceNameError::HyphenBoundary("-ab".to_string()))
        );
        assert_eq!(
            validate_voice_name("ab-"),
            Err(VoiceNameError::HyphenBoundary("ab-".to_string()))
        );
        assert!(matches!(
            validate_voice_name(&"a".repeat(33)),
            Err(VoiceNameError::TooLong(_))
        ));
        assert_eq!(
            validate_voice_name("Blog"),
            Err(VoiceNameError::InvalidCharacter {
                name: "Blog".to_string(),
                ch: 'B'
            })
        );
        assert!(!is_valid_voice_name("my_voice"));
        assert!(!is_valid_voice_name("../etc"));
    }

    #[test]
    fn test_base_reserved_only_for_declarations() {
        assert!(is_valid_voice_name("base"));
        assert_eq!(validate_declared_name("base"), Err(VoiceNameError::Reserved));
        assert!(validate_declared_name("docs").is_ok());
    }
}
