//! Mapping voice names to profile files

use super::name::{validate_voice_name, BASE_VOICE};
use crate::error::VoiceNameError;
use crate::paths::ProjectPaths;
use crate::Result;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Which profile document an operation addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileTarget {
    Base,
    Voice(String),
}

impl ProfileTarget {
    /// Interpret a caller-supplied voice name
    ///
    /// Absent, empty or `base` selects the base profile. Anything else must
    /// pass the name grammar as given, which also keeps it from escaping `voices/`.
    pub fn parse(name: Option<&str>) -> std::result::Result<Self, VoiceNameError> {
        match name {
            None | Some("") | Some(BASE_VOICE) => Ok(ProfileTarget::Base),
            Some(name) => {
                validate_voice_name(name)?;
                Ok(ProfileTarget::Voice(name.to_string()))
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ProfileTarget::Base => BASE_VOICE,
            ProfileTarget::Voice(name) => name,
        }
    }

    pub fn path(&self, paths: &ProjectPaths) -> Result<PathBuf> {
        match self {
            ProfileTarget::Base => paths.base_profile(),
            ProfileTarget::Voice(name) => paths.voice_profile(name),
        }
    }
}

/// Names of voice profiles present under `voices/`, sorted
pub fn list_voice_profiles(paths: &ProjectPaths) -> Result<Vec<String>> {
    let voices_dir = paths.voices_dir()?;

    let mut names = Vec::new();
    for entry in WalkDir::new(&voices_dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().map_or(true, |ext| ext != "md") {
            continue;
        }
        if let Some(stem) = path.file_stem() {
            names.push(stem.to_string_lossy().to_string());
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_base_aliases() {
        assert_eq!(ProfileTarget::parse(None).unwrap(), ProfileTarget::Base);
        assert_eq!(ProfileTarget::parse(Some("")).unwrap(), ProfileTarget::Base);
        assert_eq!(ProfileTarget::parse(Some("base")).unwrap(), ProfileTarget::Base);
    }

    #[test]
    fn test_parse_rejects_bad_names() {
        assert!(ProfileTarget::parse(Some("Blog")).is_err());
        assert!(ProfileTarget::parse(Some("../secret")).is_err());
        assert!(ProfileTarget::parse(Some(" blog ")).is_err());
        assert!(ProfileTarget::parse(Some(" ")).is_err());
        assert_eq!(
            ProfileTarget::parse(Some("blog")).unwrap(),
            ProfileTarget::Voice("blog".to_string())
        );
    }

    #[test]
    fn test_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(temp_dir.path());
        let root = temp_dir.path().join(".interfluence");

        assert_eq!(
            ProfileTarget::Base.path(&paths).unwrap(),
            root.join("voice-profile.md")
        );
        assert_eq!(
            ProfileTarget::Voice("blog".to_string()).path(&paths).unwrap(),
            root.join("voices/blog.md")
        );
    }

    #[test]
    fn test_list_voice_profiles() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ProjectPaths::new(temp_dir.path());
        let voices_dir = paths.voices_dir().unwrap();

        std::fs::write(voices_dir.join("docs.md"), "# Docs").unwrap();
        std::fs::write(voices_dir.join("blog.md"), "# Blog").unwrap();
        std::fs::write(voices_dir.join("notes.txt"), "ignored").unwrap();
        std::fs::create_dir_all(voices_dir.join("nested")).unwrap();
        std::fs::write(voices_dir.join("nested/deep.md"), "ignored").unwrap();

        assert_eq!(list_voice_profiles(&paths).unwrap(), vec!["blog", "docs"]);
    }
}
