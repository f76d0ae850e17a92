use tracing::warn;

use crate::types::WordRecord;

use super::span_duration;

/// Bisect every segment longer than `max_duration` until all of them fit.
///
/// Splitting happens at the time midpoint of the segment's span: words whose
/// end falls at or before the midpoint go left, the rest go right, and both
/// halves are re-examined. A segment that cannot shrink any further (a
/// single word spanning more than the bound, or timestamps that leave one
/// half covering the whole span) is kept over-long with a warning instead of
/// looping forever.
pub fn split_long_segments(
    segments: Vec<Vec<WordRecord>>,
    max_duration: f64,
) -> Vec<Vec<WordRecord>> {
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        push_within_bound(segment, max_duration, &mut out);
    }
    out
}

fn push_within_bound(segment: Vec<WordRecord>, max_duration: f64, out: &mut Vec<Vec<WordRecord>>) {
    let duration = span_duration(&segment);
    if duration <= max_duration {
        out.push(segment);
        return;
    }

    let (left, right) = split_at_midpoint(&segment);
    let splittable = !left.is_empty()
        && !right.is_empty()
        && span_duration(&left) < duration
        && span_duration(&right) < duration;
    if !splittable {
        warn!(
            duration,
            words = segment.len(),
            "segment cannot be bisected any further; keeping it over-long"
        );
        out.push(segment);
        return;
    }

    push_within_bound(left, max_duration, out);
    push_within_bound(right, max_duration, out);
}

fn split_at_midpoint(segment: &[WordRecord]) -> (Vec<WordRecord>, Vec<WordRecord>) {
    let midpoint = segment[0].start + span_duration(segment) / 2.0;
    let mut left = Vec::new();
    let mut right = Vec::new();
    for word in segment {
        if word.end <= midpoint {
            left.push(word.clone());
        } else {
            right.push(word.clone());
        }
    }
    (left, right)
}
