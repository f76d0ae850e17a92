//! Sentence-boundary segmentation of word-timestamped transcripts.
//!
//! Fixed pipeline per recording: boundary grouping (with end padding),
//! long-segment bisection, flattening, forward merging, and
//! duration/content filtering.

mod boundary;
mod filter;
mod flatten;
mod merge;
mod splitter;


pub use boundary::group_at_boundaries;
pub use filter::filter_segments;
pub use flatten::flatten;
pub use merge::merge_forward;
pub use splitter::split_long_segments;

use anyhow::Result;
use tracing::debug;

use crate::types::{FlatSegment, SegmentConfig, WordRecord};

/// Round a seconds value to two decimals, the precision all segment
/// durations carry.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Duration of a word run, rounded like every other duration.
pub(crate) fn span_duration(segment: &[WordRecord]) -> f64 {
    match (segment.first(), segment.last()) {
        (Some(first), Some(last)) => round2(last.end - first.start),
        _ => 0.0,
    }
}

/// Run the full segmentation pipeline over one recording's word records.
pub fn segment_words(words: &[WordRecord], config: SegmentConfig) -> Result<Vec<FlatSegment>> {
    let grouped = group_at_boundaries(words)?;
    debug!(segments = grouped.len(), "grouped at sentence boundaries");

    let bounded = split_long_segments(grouped, config.max_duration);
    debug!(segments = bounded.len(), "after splitting long segments");

    let flattened: Vec<FlatSegment> = bounded.iter().map(|seg| flatten(seg)).collect();
    let merged = merge_forward(flattened, config.max_duration);
    debug!(segments = merged.len(), "after forward merging");

    let kept = filter_segments(merged, config.min_duration);
    debug!(segments = kept.len(), "after duration/content filtering");
    Ok(kept)
}
