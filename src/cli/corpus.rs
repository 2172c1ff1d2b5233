//! Corpus CLI commands

use crate::models::SampleSource;
use crate::services::corpus_service::{self, AddFileInput, AddTextInput};
use crate::Result;
use anyhow::Context;
use clap::Subcommand;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum CorpusCommands {
    /// List all writing samples
    List,

    /// Print a sample with its metadata
    Get {
        /// Sample ID (e.g., "sample-20240501120000-a1b2c3")
        sample_id: String,
    },

    /// Add a writing sample from a file
    Add {
        /// Path to the file to ingest
        file: PathBuf,

        /// Title (defaults to the file name)
        #[arg(short, long)]
        title: Option<String>,

        /// Tag for categorization (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Add a writing sample from text (read from --from-file or stdin)
    AddText {
        /// Title for the sample
        #[arg(short, long)]
        title: String,

        /// Where the text came from (url, clipboard, inline)
        #[arg(short, long, default_value = "inline")]
        source: SampleSource,

        /// Source URL if applicable
        #[arg(long)]
        url: Option<String>,

        /// Read the text from this file instead of stdin
        #[arg(long)]
        from_file: Option<PathBuf>,

        /// Tag for categorization (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Remove a writing sample
    Remove {
        /// Sample ID
        sample_id: String,
    },
}

fn non_empty(tags: Vec<String>) -> Option<Vec<String>> {
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

pub fn run(cmd: CorpusCommands, project_root: &Path) -> Result<()> {
    let result = match cmd {
        CorpusCommands::List => corpus_service::list_corpus(project_root)?,
        CorpusCommands::Get { sample_id } => corpus_service::get_sample(&sample_id, project_root)?,
        CorpusCommands::Add { file, title, tags } => {
            let input = AddFileInput {
                file_path: file,
                title,
                tags: non_empty(tags),
            };
            corpus_service::add_file(input, project_root)?
        }
        CorpusCommands::AddText {
            title,
            source,
            url,
            from_file,
            tags,
        } => {
            if source == SampleSource::File {
                anyhow::bail!("Use 'corpus add <file>' to ingest a file");
            }
            let text = match from_file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut text = String::new();
                    std::io::stdin()
                        .read_to_string(&mut text)
                        .context("Failed to read text from stdin")?;
                    text
                }
            };
            let input = AddTextInput {
                text,
                title,
                source,
                source_url: url,
                tags: non_empty(tags),
            };
            corpus_service::add_text(input, project_root)?
        }
        CorpusCommands::Remove { sample_id } => {
            corpus_service::remove_sample(&sample_id, project_root)?
        }
    };
    println!("{}", result);
    Ok(())
}
