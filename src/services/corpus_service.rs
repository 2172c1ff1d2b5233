//! Corpus service - Business logic for writing-sample operations

use crate::models::SampleSource;
use crate::paths::ProjectPaths;
use crate::store::{CorpusStore, NewSample};
use crate::Result;
use chrono::SecondsFormat;
use std::path::{Path, PathBuf};

/// Input for adding a sample from a file
#[derive(Debug)]
pub struct AddFileInput {
    pub file_path: PathBuf,
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Input for adding a sample from raw text
#[derive(Debug)]
pub struct AddTextInput {
    pub text: String,
    pub title: String,
    pub source: SampleSource,
    pub source_url: Option<String>,
    pub tags: Option<Vec<String>>,
}

fn store(project_root: &Path) -> CorpusStore {
    CorpusStore::new(ProjectPaths::new(project_root))
}

/// Ingest a file into the corpus
pub fn add_file(input: AddFileInput, project_root: &Path) -> Result<String> {
    let new_sample = NewSample::from_file(&input.file_path, input.title, input.tags)?;
    let sample = store(project_root).add(new_sample)?;

    Ok(format!(
        "Added sample \"{}\" ({})\n- Words: {}\n- Stored as: {}",
        sample.display_title(),
        sample.id,
        sample.word_count,
        sample.filename
    ))
}

/// Ingest raw text into the corpus
pub fn add_text(input: AddTextInput, project_root: &Path) -> Result<String> {
    let new_sample = NewSample::from_text(
        input.text,
        input.title,
        input.source,
        input.source_url,
        input.tags,
    );
    let sample = store(project_root).add(new_sample)?;

    let source_url = sample
        .source_url
        .as_ref()
        .map(|url| format!(" ({})", url))
        .unwrap_or_default();

    Ok(format!(
        "Added sample \"{}\" ({})\n- Words: {}\n- Source: {}{}\n- Stored as: {}",
        sample.display_title(),
        sample.id,
        sample.word_count,
        sample.source,
        source_url,
        sample.filename
    ))
}

/// List samples in insertion order
pub fn list_corpus(project_root: &Path) -> Result<String> {
    let index = store(project_root).load_index()?;

    if index.is_empty() {
        return Ok(
            "No samples in corpus. Use corpus_add or corpus_add_text to add writing samples."
                .to_string(),
        );
    }

    let mut result = format!(
        "Corpus: {} samples, {} total words\n",
        index.samples.len(),
        format_count(index.total_words())
    );

    for sample in &index.samples {
        let status = if sample.analyzed { "analyzed" } else { "pending" };
        let tags = match &sample.tags {
            Some(tags) if !tags.is_empty() => format!(" [{}]", tags.join(", ")),
            _ => String::new(),
        };
        result.push_str(&format!(
            "\n- {}: \"{}\" ({} words, {}){}",
            sample.id,
            sample.display_title(),
            sample.word_count,
            status,
            tags
        ));
    }

    Ok(result)
}

/// Full text of one sample with a metadata header
pub fn get_sample(sample_id: &str, project_root: &Path) -> Result<String> {
    let Some((sample, content)) = store(project_root).get(sample_id)? else {
        return Ok(format!(
            "Sample \"{}\" not found. Use corpus_list to see available samples.",
            sample_id
        ));
    };

    let source_url = sample
        .source_url
        .as_ref()
        .map(|url| format!(" ({})", url))
        .unwrap_or_default();

    Ok(format!(
        "# {}\n\nSource: {}{}\nWords: {}\nAdded: {}\n\n---\n\n{}",
        sample.display_title(),
        sample.source,
        source_url,
        sample.word_count,
        sample.added_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        content
    ))
}

/// Remove a sample and its stored file
pub fn remove_sample(sample_id: &str, project_root: &Path) -> Result<String> {
    match store(project_root).remove(sample_id)? {
        Some(sample) => Ok(format!(
            "Removed sample \"{}\" ({})",
            sample.display_title(),
            sample_id
        )),
        None => Ok(format!("Sample \"{}\" not found.", sample_id)),
    }
}

/// Every sample's content, each under a `--- SAMPLE: title (id) ---` header
pub fn get_all_samples(project_root: &Path) -> Result<String> {
    let store = store(project_root);
    let index = store.load_index()?;

    if index.is_empty() {
        return Ok("No samples in corpus.".to_string());
    }

    let mut parts = Vec::with_capacity(index.samples.len());
    for sample in &index.samples {
        let content = store.read_content(sample)?;
        parts.push(format!(
            "--- SAMPLE: {} ({}) ---\n\n{}",
            sample.display_title(),
            sample.id,
            content
        ));
    }

    Ok(format!(
        "{} samples, {} total words\n\n{}",
        index.samples.len(),
        format_count(index.total_words()),
        parts.join("\n\n")
    ))
}

/// Format a count with thousands separators (12345 -> "12,345")
fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}
