//! Run-level orchestration: one synchronous pass over every recording.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::corpus::{discover_recordings, load_transcript, SplitManifest};
use crate::output::{ManifestPaths, RunWriter};
use crate::segmentation::segment_words;
use crate::types::SegmentConfig;

/// Segment every recording under `recordings_dir` and write the per-split
/// artifacts and manifest files under `output_dir`.
///
/// Recordings are processed one at a time in sorted id order. When an
/// aggregate manifest from a previous run is already present the whole step
/// is skipped and the existing paths are returned unchanged; callers must
/// not assume fresh content without checking.
pub fn run_segmentation(
    recordings_dir: &Path,
    output_dir: &Path,
    splits_dir: &Path,
    config: SegmentConfig,
) -> Result<ManifestPaths> {
    let manifests = ManifestPaths::for_root(output_dir);
    if manifests.any_exists() {
        warn!(
            output = %output_dir.display(),
            "aggregate manifests already exist; skipping segmentation"
        );
        return Ok(manifests);
    }

    let splits = SplitManifest::load(splits_dir)?;
    let recordings = discover_recordings(recordings_dir)?;
    info!(recordings = recordings.len(), "starting segmentation run");

    let mut writer = RunWriter::create(output_dir)?;
    for recording in &recordings {
        let split = splits.split_for(&recording.id)?;
        let words = load_transcript(&recording.transcript_path)?;
        let segments = segment_words(&words, config)
            .with_context(|| format!("failed to segment recording {}", recording.id))?;
        info!(
            recording = %recording.id,
            split = split.as_str(),
            words = words.len(),
            segments = segments.len(),
            "segmented recording"
        );
        writer.write_recording(recording, split, &segments)?;
    }
    writer.finish()
}
