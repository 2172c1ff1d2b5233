//! Reconciliation of configured voices against profile files on disk

use super::name::BASE_VOICE;
use crate::models::VoiceConfig;
use std::collections::HashSet;
use std::fmt;

/// Informational mismatch between config and disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileWarning {
    /// Declared in config with no profile file; resolution falls through to base
    Unresolvable(String),
    /// Profile file with no config entry; reachable only by explicit name
    Inert(String),
}

impl fmt::Display for ReconcileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileWarning::Unresolvable(name) => write!(
                f,
                "Voice '{}' is configured but voices/{}.md does not exist; matching paths fall through as if unconfigured",
                name, name
            ),
            ReconcileWarning::Inert(name) => write!(
                f,
                "voices/{}.md exists but no config entry references it; it cannot be auto-selected by path, only by explicit name",
                name
            ),
        }
    }
}

/// Compare configured voices with profiles on disk
///
/// `configured` is `None` when there is no config file, in which case there
/// is nothing to reconcile. Each name is reported at most once.
pub fn reconcile(configured: Option<&[VoiceConfig]>, on_disk: &[String]) -> Vec<ReconcileWarning> {
    let Some(configured) = configured else {
        return Vec::new();
    };

    let disk: HashSet<&str> = on_disk.iter().map(String::as_str).collect();
    let mut declared: HashSet<&str> = HashSet::new();
    let mut warnings = Vec::new();

    for voice in configured {
        let name = voice.name.as_str();
        if !declared.insert(name) {
            continue;
        }
        if name != BASE_VOICE && !disk.contains(name) {
            warnings.push(ReconcileWarning::Unresolvable(name.to_string()));
        }
    }

    for name in on_disk {
        if !declared.contains(name.as_str()) {
            warnings.push(ReconcileWarning::Inert(name.clone()));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_missing_configured_voice() {
        let configured = vec![
            VoiceConfig::new("blog", &["posts/**"]),
            VoiceConfig::new("docs", &["docs/**"]),
        ];
        let warnings = reconcile(Some(&configured), &names(&["blog"]));
        assert_eq!(warnings, vec![ReconcileWarning::Unresolvable("docs".to_string())]);
    }

    #[test]
    fn test_inert_voice_file() {
        let configured = vec![VoiceConfig::new("blog", &["posts/**"])];
        let warnings = reconcile(Some(&configured), &names(&["blog", "extra"]));
        assert_eq!(warnings, vec![ReconcileWarning::Inert("extra".to_string())]);
    }

    #[test]
    fn test_both_classes_reported() {
        let configured = vec![VoiceConfig::new("docs", &["docs/**"])];
        let warnings = reconcile(Some(&configured), &names(&["extra"]));
        assert_eq!(
            warnings,
            vec![
                ReconcileWarning::Unresolvable("docs".to_string()),
                ReconcileWarning::Inert("extra".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_config_suppresses_warnings() {
        assert!(reconcile(None, &names(&["extra"])).is_empty());
    }

    #[test]
    fn test_duplicate_names_reported_once() {
        let configured = vec![
            VoiceConfig::new("docs", &["docs/**"]),
            VoiceConfig::new("docs", &["guide/**"]),
        ];
        assert_eq!(reconcile(Some(&configured), &[]).len(), 1);
    }

    #[test]
    fn test_warning_text() {
        let text = ReconcileWarning::Unresolvable("docs".to_string()).to_string();
        assert!(text.contains("configured but"));
        let text = ReconcileWarning::Inert("extra".to_string()).to_string();
        assert!(text.contains("exists but no config entry"));
    }
}
