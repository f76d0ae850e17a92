use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, ensure, Context, Result};
use serde::Deserialize;

use crate::types::WordRecord;

/// One recording located on disk: its identifier plus the paths to its
/// transcript document and source audio.
#[derive(Debug, Clone)]
pub struct Recording {
    pub id: String,
    pub transcript_path: PathBuf,
    pub audio_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct TranscriptFile {
    words: Vec<WordRecord>,
}

/// Find every transcript under the recordings folder.
///
/// A recording is a `<id>.json` transcript with a sibling `<id>.wav`;
/// nested folders are walked so corpora laid out one directory per
/// conversation work unchanged. Results are sorted by id so a run always
/// processes recordings in the same order.
pub fn discover_recordings(root: &Path) -> Result<Vec<Recording>> {
    ensure!(root.is_dir(), "recordings folder {:?} does not exist", root);

    let mut recordings = Vec::new();
    collect_recordings(root, &mut recordings)?;
    ensure!(
        !recordings.is_empty(),
        "no transcripts found under {:?}",
        root
    );

    recordings.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(recordings)
}

fn collect_recordings(dir: &Path, out: &mut Vec<Recording>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to list recordings in {:?}", dir))?;

    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to read directory entry in {:?}", dir))?
            .path();
        if path.is_dir() {
            collect_recordings(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "json") {
            let id = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_owned)
                .ok_or_else(|| anyhow!("transcript path {:?} has no usable file stem", path))?;
            out.push(Recording {
                id,
                audio_path: path.with_extension("wav"),
                transcript_path: path,
            });
        }
    }
    Ok(())
}

/// Load the ordered word records for one recording.
pub fn load_transcript(path: &Path) -> Result<Vec<WordRecord>> {
    let data =
        fs::read_to_string(path).with_context(|| format!("failed to read transcript {:?}", path))?;
    let parsed: TranscriptFile = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse transcript {:?}", path))?;
    Ok(parsed.words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_words_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rec_a.json");
        fs::write(
            &path,
            r#"{"words": [{"word": "hello.", "norm_word": "hello", "start": 0.0, "end": 0.5}]}"#,
        )
        .unwrap();

        let words = load_transcript(&path).unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "hello.");
        assert_eq!(words[0].norm_word, "hello");
        assert_eq!(words[0].start, 0.0);
        assert_eq!(words[0].end, 0.5);
    }

    #[test]
    fn discovers_nested_recordings_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        let inner = dir.path().join("conversations").join("pair_01");
        fs::create_dir_all(&inner).unwrap();
        fs::write(inner.join("rec_b.json"), r#"{"words": []}"#).unwrap();
        fs::write(dir.path().join("rec_a.json"), r#"{"words": []}"#).unwrap();

        let recordings = discover_recordings(dir.path()).unwrap();
        let ids: Vec<&str> = recordings.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["rec_a", "rec_b"]);
        assert!(recordings[1].audio_path.ends_with("pair_01/rec_b.wav"));
    }

    #[test]
    fn missing_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nowhere");
        let err = discover_recordings(&missing).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
