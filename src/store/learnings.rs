//! Raw learnings log (`learnings-raw.log`) and processed learnings (`learnings.md`)

use crate::paths::ProjectPaths;
use crate::Result;
use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use std::io::Write;

/// Append one entry, creating the log if needed
///
/// Entry layout: a blank line, `--- {timestamp} | {file_path} ---`, then the diff.
pub fn append_learning(
    paths: &ProjectPaths,
    file_path: &str,
    diff: &str,
    timestamp: Option<&str>,
) -> Result<()> {
    let log_path = paths.learnings_raw()?;
    let ts = match timestamp {
        Some(ts) if !ts.trim().is_empty() => ts.to_string(),
        _ => Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context("Failed to open learnings-raw.log")?;
    write!(file, "\n--- {} | {} ---\n{}\n", ts, file_path, diff)
        .context("Failed to append to learnings-raw.log")?;

    tracing::debug!(file_path, "appended learning");
    Ok(())
}

/// Full raw log, or `None` when it is absent or blank
pub fn read_raw_learnings(paths: &ProjectPaths) -> Result<Option<String>> {
    read_optional(&paths.learnings_raw()?)
}

/// Truncate the raw log, leaving the file in place
pub fn clear_raw_learnings(paths: &ProjectPaths) -> Result<()> {
    let log_path = paths.learnings_raw()?;
    std::fs::write(&log_path, "").context("Failed to clear learnings-raw.log")?;
    Ok(())
}

/// Processed learnings document, or `None` when absent or blank
pub fn read_processed_learnings(paths: &ProjectPaths) -> Result<Option<String>> {
    read_optional(&paths.learnings()?)
}

fn read_optional(path: &std::path::Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(content))
}
