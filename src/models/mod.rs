pub mod config;
pub mod corpus;

pub use config::{ConfigUpdate, InterfluenceConfig, Mode, VoiceConfig};
pub use corpus::{count_words, generate_sample_id, CorpusIndex, CorpusSample, SampleSource};
