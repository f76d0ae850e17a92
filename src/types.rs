//! Core types for the transcut segmentation pipeline

use serde::Deserialize;

/// One word-level timing annotation produced by the upstream transcription
/// stage. Records are ordered by `start` within a recording and stay
/// read-only except for end-padding when a segment closes on punctuation.
#[derive(Debug, Clone, Deserialize)]
pub struct WordRecord {
    /// Raw word token, possibly carrying terminal punctuation.
    pub word: String,
    /// Normalized form; empty for non-lexical placeholder tokens.
    pub norm_word: String,
    pub start: f64, // seconds
    pub end: f64,   // seconds
}

/// Aggregate record derived from a run of word records.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatSegment {
    pub text: String,
    pub text_norm: String,
    pub start: f64,
    pub end: f64,
    /// `end - start`, rounded to two decimals.
    pub duration: f64,
}

/// Named corpus partition a recording is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Dev,
    Train,
    Test,
}

impl Split {
    pub const ALL: [Split; 3] = [Split::Dev, Split::Train, Split::Test];

    pub fn as_str(self) -> &'static str {
        match self {
            Split::Dev => "dev",
            Split::Train => "train",
            Split::Test => "test",
        }
    }
}

/// Configuration for one segmentation run.
#[derive(Debug, Clone, Copy)]
pub struct SegmentConfig {
    /// Segments shorter than this are dropped.
    pub min_duration: f64,
    /// Segments longer than this are bisected; merges never exceed it.
    pub max_duration: f64,
}

impl SegmentConfig {
    pub fn new(min_duration: f64, max_duration: f64) -> Self {
        Self {
            min_duration,
            max_duration,
        }
    }
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self::new(2.0, 20.0)
    }
}
