//! Transcut - transcript-driven corpus segmentation.
//!
//! Cuts word-timestamped recordings into bounded-duration segments at
//! sentence boundaries, assigns each segment to a corpus split, and writes
//! the per-segment text artifacts and per-split manifest files used for
//! ASR training and evaluation.

pub mod corpus;
pub mod output;
pub mod run;
pub mod segmentation;
pub mod types;

pub use run::run_segmentation;
pub use types::{FlatSegment, SegmentConfig, Split, WordRecord};
