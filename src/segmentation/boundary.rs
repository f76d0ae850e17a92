use anyhow::{bail, Result};

use crate::types::WordRecord;

const TERMINALS: [char; 3] = ['.', '?', '!'];
const MAX_PADDING: f64 = 0.5;
const PADDING_BACKOFF: f64 = 0.1;

fn ends_sentence(word: &str) -> bool {
    word.chars()
        .next_back()
        .is_some_and(|c| TERMINALS.contains(&c))
}

/// Partition a recording's word sequence into sentence-bounded segments.
///
/// A segment closes on the first word ending in terminal punctuation; a
/// trailing run without one still becomes a segment, so every input word
/// lands in exactly one output segment. When a segment closes before the
/// end of the transcript, the closing word's end timestamp is padded into
/// the following silence.
pub fn group_at_boundaries(words: &[WordRecord]) -> Result<Vec<Vec<WordRecord>>> {
    let mut segments = Vec::new();
    let mut current: Vec<WordRecord> = Vec::new();

    for (idx, word) in words.iter().enumerate() {
        current.push(word.clone());
        if ends_sentence(&word.word) {
            if let (Some(last), Some(next)) = (current.last_mut(), words.get(idx + 1)) {
                last.end = pad_end(last.end, next.end)?;
            }
            segments.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    Ok(segments)
}

/// Extend a segment-final end timestamp into the gap before the next word,
/// to absorb timing inaccuracies in the word alignments.
///
/// Pads by at most [`MAX_PADDING`] seconds; when the gap is smaller, the new
/// end lands just short of the next word instead. A negative result means
/// the transcript timing is inconsistent and the run must stop.
fn pad_end(curr_end: f64, next_end: f64) -> Result<f64> {
    let gap = next_end - curr_end;
    let padded = if gap > MAX_PADDING {
        curr_end + MAX_PADDING
    } else {
        // Back off from the next word; take the smaller candidate if the
        // backoff would somehow overshoot it.
        (next_end - PADDING_BACKOFF).min(next_end)
    };
    if padded < 0.0 {
        bail!(
            "padding produced a negative end timestamp {:.3} for a word ending at {:.3}",
            padded,
            curr_end
        );
    }
    Ok(padded)
}
