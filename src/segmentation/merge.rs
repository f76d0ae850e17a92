use crate::types::FlatSegment;

use super::round2;

/// Greedily merge adjacent segments while the result stays within
/// `max_duration`.
///
/// The cursor stays put after a successful merge so the merged segment can
/// absorb further successors; it only advances when a merge would overshoot
/// the bound. Order is preserved and no merged segment ever exceeds the
/// bound.
pub fn merge_forward(mut segments: Vec<FlatSegment>, max_duration: f64) -> Vec<FlatSegment> {
    let mut idx = 0;
    while idx + 1 < segments.len() {
        let merged = merge_pair(&segments[idx], &segments[idx + 1]);
        if merged.duration <= max_duration {
            segments[idx] = merged;
            segments.remove(idx + 1);
        } else {
            idx += 1;
        }
    }
    segments
}

fn merge_pair(first: &FlatSegment, second: &FlatSegment) -> FlatSegment {
    FlatSegment {
        text: join_normalized(&first.text, &second.text),
        text_norm: join_normalized(&first.text_norm, &second.text_norm),
        start: first.start,
        end: second.end,
        duration: round2(second.end - first.start),
    }
}

/// Join two texts with a single space, collapsing any run of whitespace.
fn join_normalized(first: &str, second: &str) -> String {
    format!("{} {}", first, second)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
