//! Corpus inputs: recording discovery, transcripts and split manifests.

mod splits;
mod transcript;

pub use splits::SplitManifest;
pub use transcript::{discover_recordings, load_transcript, Recording};
