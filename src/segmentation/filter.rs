use crate::types::FlatSegment;

/// Drop segments shorter than `min_duration` and segments whose normalized
/// text is empty after trimming (placeholder tokens for unintelligible or
/// non-lexical speech normalize to nothing). Both checks always run.
pub fn filter_segments(segments: Vec<FlatSegment>, min_duration: f64) -> Vec<FlatSegment> {
    segments
        .into_iter()
        .filter(|seg| seg.duration >= min_duration)
        .filter(|seg| !seg.text_norm.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text_norm: &str, duration: f64) -> FlatSegment {
        FlatSegment {
            text: text_norm.to_string(),
            text_norm: text_norm.to_string(),
            start: 0.0,
            end: duration,
            duration,
        }
    }

    #[test]
    fn drops_short_segments() {
        let out = filter_segments(vec![seg("fine", 1.5), seg("kept", 2.0)], 2.0);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text_norm, "kept");
    }

    #[test]
    fn drops_empty_normalized_text_even_when_long_enough() {
        let out = filter_segments(vec![seg("", 5.0), seg("   ", 5.0), seg("ok", 5.0)], 2.0);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text_norm, "ok");
    }
}
