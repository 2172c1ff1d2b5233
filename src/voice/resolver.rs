//! Path-to-voice resolution
//!
//! Voices are scanned in configured order and each voice's patterns in their
//! order. The first pattern that matches decides; there is no scoring and no
//! most-specific-match rule. Patterns match the whole path, so `*.md` does not
//! match `docs/a.md` while `**/*.md` does.
//!
//! Wildcards never match a path segment starting with `.`: `*.md` skips
//! `.hidden.md` and `**` does not descend into `.github/`. Such segments are
//! only matched by a pattern segment that itself starts with a literal `.`.

use crate::models::{InterfluenceConfig, VoiceConfig};
use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};

/// Compile a pattern with shell semantics: `*` stops at `/`, `**` crosses it
pub fn compile_pattern(pattern: &str) -> Result<Glob, globset::Error> {
    GlobBuilder::new(pattern).literal_separator(true).build()
}

/// One `/`-separated piece of a pattern
enum Segment {
    Globstar,
    Part { matcher: GlobMatcher, literal_dot: bool },
}

/// Leading-dot check applied after the glob itself has matched
enum DotRule {
    Segments(Vec<Segment>),
    // braces spanning `/` cannot be split per segment
    Literal(String),
}

impl DotRule {
    fn new(pattern: &str) -> Result<Self, globset::Error> {
        let pieces = split_segments(pattern);
        if pieces.iter().any(|piece| piece.contains('/')) {
            return Ok(DotRule::Literal(pattern.to_string()));
        }

        let segments = pieces
            .into_iter()
            .map(|piece| {
                if piece == "**" {
                    Ok(Segment::Globstar)
                } else {
                    Ok(Segment::Part {
                        matcher: compile_pattern(piece)?.compile_matcher(),
                        literal_dot: starts_with_literal_dot(piece),
                    })
                }
            })
            .collect::<Result<Vec<_>, globset::Error>>()?;

        Ok(DotRule::Segments(segments))
    }

    fn allows(&self, path: &str) -> bool {
        let parts: Vec<&str> = path.split('/').collect();
        if !parts.iter().any(|part| part.starts_with('.')) {
            return true;
        }

        match self {
            DotRule::Segments(segments) => match_segments(segments, &parts),
            DotRule::Literal(pattern) => parts
                .iter()
                .filter(|part| part.starts_with('.'))
                .all(|part| pattern.contains(*part)),
        }
    }
}

/// Split on `/` outside brace groups
fn split_segments(pattern: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, ch) in pattern.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => {
                pieces.push(&pattern[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(&pattern[start..]);
    pieces
}

/// Can this pattern segment match a name starting with `.`?
fn starts_with_literal_dot(piece: &str) -> bool {
    piece.starts_with('.')
        || (piece.starts_with('{') && (piece.contains("{.") || piece.contains(",.")))
}

fn match_segments(segments: &[Segment], parts: &[&str]) -> bool {
    match segments.split_first() {
        None => parts.is_empty(),
        Some((Segment::Globstar, rest)) => {
            for skip in 0..=parts.len() {
                if skip > 0 && parts[skip - 1].starts_with('.') {
                    return false;
                }
                if match_segments(rest, &parts[skip..]) {
                    return true;
                }
            }
            false
        }
        Some((Segment::Part { matcher, literal_dot }, rest)) => {
            let Some((first, tail)) = parts.split_first() else {
                return false;
            };
            if first.starts_with('.') && !literal_dot {
                return false;
            }
            matcher.is_match(first) && match_segments(rest, tail)
        }
    }
}

/// A list of patterns compiled once and matched in a single pass
///
/// Uncompilable patterns are logged and left out, so they never match.
pub struct PatternSet {
    set: GlobSet,
    dot_rules: Vec<DotRule>,
}

impl PatternSet {
    pub fn new(patterns: &[String]) -> Self {
        let mut builder = GlobSetBuilder::new();
        let mut dot_rules = Vec::new();

        for pattern in patterns {
            let compiled = compile_pattern(pattern)
                .and_then(|glob| Ok((glob, DotRule::new(pattern)?)));
            match compiled {
                Ok((glob, rule)) => {
                    builder.add(glob);
                    dot_rules.push(rule);
                }
                Err(e) => {
                    tracing::warn!(pattern = %pattern, error = %e, "skipping invalid glob pattern")
                }
            }
        }

        let set = match builder.build() {
            Ok(set) => set,
            Err(e) => {
                tracing::warn!(error = %e, "failed to build glob set; no pattern will match");
                dot_rules.clear();
                GlobSet::empty()
            }
        };

        Self { set, dot_rules }
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.set
            .matches(path)
            .into_iter()
            .any(|i| self.dot_rules[i].allows(path))
    }
}

/// Does any of `patterns` match `path`?
pub fn matches_any(patterns: &[String], path: &str) -> bool {
    PatternSet::new(patterns).is_match(path)
}

/// Compiled voice list for repeated resolution
pub struct VoiceResolver<'a> {
    voices: Vec<(&'a str, PatternSet)>,
}

impl<'a> VoiceResolver<'a> {
    pub fn new(voices: &'a [VoiceConfig]) -> Self {
        Self {
            voices: voices
                .iter()
                .map(|voice| (voice.name.as_str(), PatternSet::new(&voice.apply_to)))
                .collect(),
        }
    }

    /// First voice with a matching pattern, or `None` when base applies
    pub fn resolve(&self, file_path: &str) -> Option<&'a str> {
        self.voices
            .iter()
            .find(|(_, patterns)| patterns.is_match(file_path))
            .map(|(name, _)| *name)
    }
}

/// Select the voice governing `file_path`
///
/// Returns the first voice with a matching pattern, or `None` when the base
/// profile applies.
pub fn resolve_voice<'a>(file_path: &str, voices: &'a [VoiceConfig]) -> Option<&'a str> {
    VoiceResolver::new(voices).resolve(file_path)
}

/// Is `file_path` inside the auto-apply set (and outside the exclusions)?
pub fn auto_applies(file_path: &str, config: &InterfluenceConfig) -> bool {
    matches_any(&config.auto_apply_to, file_path) && !matches_any(&config.exclude, file_path)
}
