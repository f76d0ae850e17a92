use crate::types::{FlatSegment, WordRecord};

use super::round2;

/// Reduce a word run to its aggregate segment record. Pure; no filtering.
pub fn flatten(segment: &[WordRecord]) -> FlatSegment {
    let text = segment
        .iter()
        .map(|w| w.word.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let text_norm = segment
        .iter()
        .map(|w| w.norm_word.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let start = segment.first().map_or(0.0, |w| w.start);
    let end = segment.last().map_or(0.0, |w| w.end);

    FlatSegment {
        text,
        text_norm,
        start,
        end,
        duration: round2(end - start),
    }
}
