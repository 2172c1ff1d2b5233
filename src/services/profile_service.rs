//! Profile service - Voice profiles, listing/reconciliation and path resolution

use crate::paths::ProjectPaths;
use crate::store::{load_config, load_config_or_default};
use crate::voice::{auto_applies, list_voice_profiles, reconcile, resolve_voice, ProfileTarget};
use crate::Result;
use anyhow::Context;
use std::path::Path;

/// Read the base profile or a named voice profile
pub fn get_profile(voice: Option<&str>, project_root: &Path) -> Result<String> {
    let target = match ProfileTarget::parse(voice) {
        Ok(target) => target,
        Err(e) => return Ok(format!("Invalid voice name: {}", e)),
    };

    let paths = ProjectPaths::new(project_root);
    let profile_path = target.path(&paths)?;

    if !profile_path.exists() {
        return Ok(match target {
            ProfileTarget::Base => "No voice profile exists yet. Use /interfluence analyze to generate one from your corpus.".to_string(),
            ProfileTarget::Voice(name) => format!(
                "No profile exists for voice '{}' yet. Use profile_save with voice '{}' to create one.",
                name, name
            ),
        });
    }

    std::fs::read_to_string(&profile_path)
        .with_context(|| format!("Failed to read {}", profile_path.display()))
}

/// Write the base profile or a named voice profile
pub fn save_profile(content: &str, voice: Option<&str>, project_root: &Path) -> Result<String> {
    let target = match ProfileTarget::parse(voice) {
        Ok(target) => target,
        Err(e) => return Ok(format!("Invalid voice name: {}", e)),
    };

    let paths = ProjectPaths::new(project_root);
    let profile_path = target.path(&paths)?;
    std::fs::write(&profile_path, content)
        .with_context(|| format!("Failed to write {}", profile_path.display()))?;

    tracing::debug!(voice = target.name(), "saved voice profile");
    Ok(match target {
        ProfileTarget::Base => format!("Voice profile saved to {}", profile_path.display()),
        ProfileTarget::Voice(name) => format!(
            "Voice profile '{}' saved to {}",
            name,
            profile_path.display()
        ),
    })
}

/// List available profiles and reconcile them with the config
pub fn list_profiles(project_root: &Path) -> Result<String> {
    let paths = ProjectPaths::new(project_root);
    let config = load_config(&paths)?;
    let on_disk = list_voice_profiles(&paths)?;
    let configured = config.as_ref().map(|c| c.voices());

    let mut result = String::from("# Voice Profiles\n\n");

    let base_state = if paths.base_profile()?.exists() {
        ""
    } else {
        " (not written yet)"
    };
    result.push_str(&format!("- **base**: voice-profile.md{}\n", base_state));

    for name in &on_disk {
        result.push_str(&format!("- **{}**: voices/{}.md", name, name));
        let patterns = configured
            .and_then(|voices| voices.iter().find(|v| &v.name == name))
            .map(|v| v.apply_to.join(", "));
        if let Some(patterns) = patterns {
            result.push_str(&format!(" (applies to: {})", patterns));
        }
        result.push('\n');
    }

    result.push_str(&format!("\nTotal: {} profile(s)", on_disk.len() + 1));

    let warnings = reconcile(configured, &on_disk);
    if !warnings.is_empty() {
        result.push_str("\n\n## Warnings\n\n");
        for warning in &warnings {
            result.push_str(&format!("- {}\n", warning));
        }
    }

    Ok(result.trim_end().to_string())
}

/// Report which voice governs `file_path`
///
/// Voices without a profile file are skipped, so a path they match falls
/// through to the next voice or to base.
pub fn resolve_for_path(file_path: &str, project_root: &Path) -> Result<String> {
    let paths = ProjectPaths::new(project_root);
    let config = load_config_or_default(&paths)?;
    let on_disk = list_voice_profiles(&paths)?;

    let available: Vec<_> = config
        .voices()
        .iter()
        .filter(|v| on_disk.contains(&v.name))
        .cloned()
        .collect();

    let configured_match = resolve_voice(file_path, config.voices());
    let effective = resolve_voice(file_path, &available);

    let target = match effective {
        Some(name) => ProfileTarget::Voice(name.to_string()),
        None => ProfileTarget::Base,
    };
    let profile_path = target.path(&paths)?;
    let relative = profile_path
        .strip_prefix(project_root)
        .unwrap_or(&profile_path)
        .display()
        .to_string();

    let mut result = format!("File: {}\nVoice: {}\nProfile: {}", file_path, target.name(), relative);
    if !profile_path.exists() {
        result.push_str(" (not written yet)");
    }

    if let Some(skipped) = configured_match.filter(|name| Some(*name) != effective) {
        result.push_str(&format!(
            "\nNote: voice '{}' matched first but voices/{}.md does not exist; skipped",
            skipped, skipped
        ));
    }

    let applies = if auto_applies(file_path, &config) { "yes" } else { "no" };
    result.push_str(&format!("\nAuto-apply: {} (mode: {})", applies, config.mode));

    tracing::debug!(file_path, voice = target.name(), "resolved voice");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InterfluenceConfig, VoiceConfig};
    use crate::store::save_config;
    use tempfile::TempDir;

    fn write_voice(project_root: &Path, name: &str) {
        let paths = ProjectPaths::new(project_root);
        std::fs::write(paths.voice_profile(name).unwrap(), format!("# {}", name)).unwrap();
    }

    fn configure(project_root: &Path, voices: Vec<VoiceConfig>) {
        let paths = ProjectPaths::new(project_root);
        save_config(
            &paths,
            &InterfluenceConfig {
                voices: Some(voices),
                ..Default::default()
            },
        )
        .unwrap();
    }

    #[test]
    fn test_base_profile_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let project_root = temp_dir.path();

        let missing = get_profile(None, project_root).unwrap();
        assert!(missing.starts_with("No voice profile exists yet"));

        let saved = save_profile("# Voice\n\nShort sentences.", None, project_root).unwrap();
        assert!(saved.starts_with("Voice profile saved to"));
        assert_eq!(
            get_profile(Some("base"), project_root).unwrap(),
            "# Voice\n\nShort sentences."
        );
    }

    #[test]
    fn test_named_voice_profile() {
        let temp_dir = TempDir::new().unwrap();
        let project_root = temp_dir.path();

        let missing = get_profile(Some("blog"), project_root).unwrap();
        assert!(missing.contains("No profile exists for voice 'blog'"));

        let saved = save_profile("casual", Some("blog"), project_root).unwrap();
        assert!(saved.starts_with("Voice profile 'blog' saved to"));
        assert!(project_root.join(".interfluence/voices/blog.md").exists());
        assert_eq!(get_profile(Some("blog"), project_root).unwrap(), "casual");
    }

    #[test]
    fn test_invalid_voice_name_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let project_root = temp_dir.path();

        let result = save_profile("x", Some("../escape"), project_root).unwrap();
        assert!(result.starts_with("Invalid voice name:"));
        let result = get_profile(Some("Blog"), project_root).unwrap();
        assert!(result.starts_with("Invalid voice name:"));
        assert!(!project_root.join(".interfluence/escape.md").exists());
    }

    #[test]
    fn test_list_without_config_has_no_warnings() {
        let temp_dir = TempDir::new().unwrap();
        write_voice(temp_dir.path(), "extra");

        let result = list_profiles(temp_dir.path()).unwrap();
        assert!(result.contains("- **base**: voice-profile.md (not written yet)"));
        assert!(result.contains("- **extra**: voices/extra.md"));
        assert!(result.contains("Total: 2 profile(s)"));
        assert!(!result.contains("Warnings"));
    }

    #[test]
    fn test_list_reports_unresolvable_voice() {
        let temp_dir = TempDir::new().unwrap();
        configure(
            temp_dir.path(),
            vec![
                VoiceConfig::new("blog", &["posts/**"]),
                VoiceConfig::new("docs", &["docs/**"]),
            ],
        );
        write_voice(temp_dir.path(), "blog");

        let result = list_profiles(temp_dir.path()).unwrap();
        assert!(result.contains("- **blog**: voices/blog.md (applies to: posts/**)"));
        assert_eq!(result.matches("Voice 'docs' is configured but").count(), 1);
        assert!(!result.contains("Voice 'blog' is configured but"));
    }

    #[test]
    fn test_list_reports_inert_voice() {
        let temp_dir = TempDir::new().unwrap();
        configure(temp_dir.path(), vec![VoiceConfig::new("blog", &["posts/**"])]);
        write_voice(temp_dir.path(), "blog");
        write_voice(temp_dir.path(), "extra");

        let result = list_profiles(temp_dir.path()).unwrap();
        assert_eq!(result.matches("exists but no config entry").count(), 1);
        assert!(result.contains("voices/extra.md exists but"));
    }

    #[test]
    fn test_resolve_for_path() {
        let temp_dir = TempDir::new().unwrap();
        configure(
            temp_dir.path(),
            vec![
                VoiceConfig::new("blog", &["posts/**"]),
                VoiceConfig::new("docs", &["docs/**"]),
            ],
        );
        write_voice(temp_dir.path(), "blog");
        write_voice(temp_dir.path(), "docs");

        let result = resolve_for_path("posts/hello.md", temp_dir.path()).unwrap();
        assert!(result.contains("Voice: blog"));
        assert!(result.contains("voices/blog.md"));

        let result = resolve_for_path("src/main.rs", temp_dir.path()).unwrap();
        assert!(result.contains("Voice: base"));
        assert!(result.contains("Auto-apply: no (mode: manual)"));
    }

    #[test]
    fn test_resolve_skips_voice_without_profile() {
        let temp_dir = TempDir::new().unwrap();
        configure(
            temp_dir.path(),
            vec![
                VoiceConfig::new("docs", &["docs/**"]),
                VoiceConfig::new("markdown", &["**/*.md"]),
            ],
        );
        write_voice(temp_dir.path(), "markdown");

        let result = resolve_for_path("docs/guide.md", temp_dir.path()).unwrap();
        assert!(result.contains("Voice: markdown"));
        assert!(result.contains("Note: voice 'docs' matched first"));
    }
}
