//! Corpus storage: sample files under `corpus/` plus `corpus-index.yaml`

use crate::models::{count_words, generate_sample_id, CorpusIndex, CorpusSample, SampleSource};
use crate::paths::ProjectPaths;
use crate::Result;
use anyhow::Context;
use chrono::Utc;
use std::path::{Path, PathBuf};

const DEFAULT_EXTENSION: &str = ".md";

/// Content and metadata for a sample about to be added
#[derive(Debug, Clone)]
pub struct NewSample {
    pub content: String,
    pub source: SampleSource,
    pub source_url: Option<String>,
    pub source_path: Option<String>,
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
    /// Extension for the stored file, including the dot
    pub extension: String,
}

impl NewSample {
    /// A sample read from a file on disk; the title defaults to the file stem
    pub fn from_file(file_path: &Path, title: Option<String>, tags: Option<Vec<String>>) -> Result<Self> {
        let content = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;

        let extension = file_path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
        let title = title.filter(|t| !t.is_empty()).or_else(|| {
            file_path
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
        });

        Ok(Self {
            content,
            source: SampleSource::File,
            source_url: None,
            source_path: Some(file_path.to_string_lossy().to_string()),
            title,
            tags,
            extension,
        })
    }

    /// A sample from raw text (fetched URL, clipboard, inline)
    pub fn from_text(
        text: String,
        title: String,
        source: SampleSource,
        source_url: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Self {
        Self {
            content: text,
            source,
            source_url,
            source_path: None,
            title: Some(title),
            tags,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Read/write access to one project's corpus
pub struct CorpusStore {
    paths: ProjectPaths,
}

impl CorpusStore {
    pub fn new(paths: ProjectPaths) -> Self {
        Self { paths }
    }

    /// Load the index; a missing or empty file is an empty corpus
    pub fn load_index(&self) -> Result<CorpusIndex> {
        let index_path = self.paths.corpus_index()?;
        if !index_path.exists() {
            return Ok(CorpusIndex::default());
        }

        let content = std::fs::read_to_string(&index_path)
            .context("Failed to read corpus-index.yaml")?;
        if content.trim().is_empty() {
            return Ok(CorpusIndex::default());
        }

        serde_yaml::from_str(&content).context("Failed to parse corpus-index.yaml")
    }

    pub fn save_index(&self, index: &CorpusIndex) -> Result<()> {
        let index_path = self.paths.corpus_index()?;
        let content = serde_yaml::to_string(index).context("Failed to serialize corpus index")?;
        std::fs::write(&index_path, content).context("Failed to write corpus-index.yaml")?;
        Ok(())
    }

    /// Store the content as `{id}{ext}` and append its record to the index
    pub fn add(&self, sample: NewSample) -> Result<CorpusSample> {
        let corpus_dir = self.paths.corpus_dir()?;
        let mut index = self.load_index()?;

        let now = Utc::now();
        let id = generate_sample_id(now);
        let filename = format!("{}{}", id, sample.extension);

        std::fs::write(corpus_dir.join(&filename), &sample.content)
            .with_context(|| format!("Failed to write corpus/{}", filename))?;

        let record = CorpusSample {
            id,
            filename,
            source: sample.source,
            source_url: sample.source_url,
            source_path: sample.source_path,
            title: sample.title,
            added_at: now,
            word_count: count_words(&sample.content),
            analyzed: false,
            tags: sample.tags,
        };

        index.samples.push(record.clone());
        self.save_index(&index)?;

        tracing::debug!(id = %record.id, words = record.word_count, "added corpus sample");
        Ok(record)
    }

    pub fn sample_path(&self, sample: &CorpusSample) -> Result<PathBuf> {
        Ok(self.paths.corpus_dir()?.join(&sample.filename))
    }

    /// Read a sample's stored content
    pub fn read_content(&self, sample: &CorpusSample) -> Result<String> {
        let path = self.sample_path(sample)?;
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read corpus/{}", sample.filename))
    }

    /// Look up a sample with its content; `None` when the id is unknown
    pub fn get(&self, id: &str) -> Result<Option<(CorpusSample, String)>> {
        let index = self.load_index()?;
        let Some(sample) = index.find(id) else {
            return Ok(None);
        };
        let content = self.read_content(sample)?;
        Ok(Some((sample.clone(), content)))
    }

    /// Remove the index entry and its file; `None` when the id is unknown
    ///
    /// A backing file that is already gone is not an error.
    pub fn remove(&self, id: &str) -> Result<Option<CorpusSample>> {
        let mut index = self.load_index()?;
        let Some(position) = index.samples.iter().position(|s| s.id == id) else {
            return Ok(None);
        };

        let sample = index.samples.remove(position);
        let path = self.sample_path(&sample)?;
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to delete corpus/{}", sample.filename))?;
        }

        self.save_index(&index)?;
        tracing::debug!(id = %sample.id, "removed corpus sample");
        Ok(Some(sample))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(temp_dir: &TempDir) -> CorpusStore {
        CorpusStore::new(ProjectPaths::new(temp_dir.path()))
    }

    fn text_sample(text: &str, title: &str) -> NewSample {
        NewSample::from_text(text.to_string(), title.to_string(), SampleSource::Inline, None, None)
    }

    #[test]
    fn test_missing_index_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(store(&temp_dir).load_index().unwrap().is_empty());
    }

    #[test]
    fn test_empty_index_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        std::fs::write(store.paths.corpus_index().unwrap(), "  \n").unwrap();
        assert!(store.load_index().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_index_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        std::fs::write(store.paths.corpus_index().unwrap(), "samples: 7\n").unwrap();
        assert!(store.load_index().is_err());
    }

    #[test]
    fn test_add_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let sample = store.add(text_sample("hello world foo", "T")).unwrap();
        assert_eq!(sample.word_count, 3);
        assert_eq!(sample.filename, format!("{}.md", sample.id));
        assert!(!sample.analyzed);

        let (found, content) = store.get(&sample.id).unwrap().unwrap();
        assert_eq!(found, sample);
        assert_eq!(content, "hello world foo");

        let removed = store.remove(&sample.id).unwrap().unwrap();
        assert_eq!(removed.id, sample.id);
        assert!(!store.sample_path(&sample).unwrap().exists());
        assert!(store.get(&sample.id).unwrap().is_none());
        assert!(store.remove(&sample.id).unwrap().is_none());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let first = store.add(text_sample("one", "First")).unwrap();
        let second = store.add(text_sample("two words", "Second")).unwrap();

        let index = store.load_index().unwrap();
        let ids: Vec<&str> = index.samples.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec![first.id.as_str(), second.id.as_str()]);
        assert_eq!(index.total_words(), 3);
    }

    #[test]
    fn test_remove_tolerates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let sample = store.add(text_sample("gone soon", "Gone")).unwrap();
        std::fs::remove_file(store.sample_path(&sample).unwrap()).unwrap();

        let removed = store.remove(&sample.id).unwrap();
        assert!(removed.is_some());
        assert!(store.load_index().unwrap().is_empty());
    }

    #[test]
    fn test_add_from_file_keeps_extension_and_stem() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);

        let source = temp_dir.path().join("essay.txt");
        std::fs::write(&source, "a b c d").unwrap();

        let sample = store.add(NewSample::from_file(&source, None, None).unwrap()).unwrap();
        assert_eq!(sample.title.as_deref(), Some("essay"));
        assert!(sample.filename.ends_with(".txt"));
        assert_eq!(sample.source, SampleSource::File);
        let source_str = source.to_string_lossy().to_string();
        assert_eq!(sample.source_path.as_deref(), Some(source_str.as_str()));
        assert_eq!(sample.word_count, 4);
    }

    #[test]
    fn test_add_from_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.md");
        assert!(NewSample::from_file(&missing, None, None).is_err());
    }
}
