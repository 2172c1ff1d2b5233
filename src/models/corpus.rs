//! Corpus index types for `corpus-index.yaml`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a writing sample came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SampleSource {
    File,
    Url,
    Clipboard,
    Inline,
}

impl fmt::Display for SampleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SampleSource::File => "file",
            SampleSource::Url => "url",
            SampleSource::Clipboard => "clipboard",
            SampleSource::Inline => "inline",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SampleSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(SampleSource::File),
            "url" => Ok(SampleSource::Url),
            "clipboard" => Ok(SampleSource::Clipboard),
            "inline" => Ok(SampleSource::Inline),
            other => anyhow::bail!(
                "Invalid source '{}': expected one of file, url, clipboard, inline",
                other
            ),
        }
    }
}

/// One writing sample. Content lives in `corpus/{filename}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CorpusSample {
    pub id: String,

    /// Storage name inside the corpus directory (`{id}{ext}`)
    pub filename: String,

    pub source: SampleSource,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub added_at: DateTime<Utc>,

    /// Whitespace-delimited token count at ingestion time
    pub word_count: usize,

    #[serde(default)]
    pub analyzed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl CorpusSample {
    /// Title for display, falling back to the id
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }
}

/// Ordered list of samples; order is insertion order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CorpusIndex {
    #[serde(default)]
    pub samples: Vec<CorpusSample>,
}

impl CorpusIndex {
    pub fn find(&self, id: &str) -> Option<&CorpusSample> {
        self.samples.iter().find(|s| s.id == id)
    }

    pub fn total_words(&self) -> usize {
        self.samples.iter().map(|s| s.word_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Count whitespace-separated tokens
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Generate a sample id: `sample-{YYYYMMDDHHMMSS}-{6 hex chars}`
pub fn generate_sample_id(now: DateTime<Utc>) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("sample-{}-{}", now.format("%Y%m%d%H%M%S"), &suffix[..6])
}
