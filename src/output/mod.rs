//! Per-split manifest sinks and per-segment artifact writing.

mod audio;

pub use audio::extract_segment;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::corpus::Recording;
use crate::types::{FlatSegment, Split};

/// Paths of the three aggregate `.trans` manifests for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPaths {
    pub dev: PathBuf,
    pub train: PathBuf,
    pub test: PathBuf,
}

impl ManifestPaths {
    pub fn for_root(root: &Path) -> Self {
        Self {
            dev: root.join("dev.trans"),
            train: root.join("train.trans"),
            test: root.join("test.trans"),
        }
    }

    /// A leftover manifest from an earlier run means the whole segmentation
    /// step must be skipped rather than appended to.
    pub fn any_exists(&self) -> bool {
        self.dev.exists() || self.train.exists() || self.test.exists()
    }
}

struct SplitSink {
    split: Split,
    trans: BufWriter<File>,
    info: BufWriter<File>,
}

/// Run-scoped writer owning the three `.trans`/`.info` sink pairs.
///
/// The sinks are opened once and stay open for the whole run so manifest
/// order matches processing order; [`RunWriter::finish`] flushes them and a
/// drop on an error path flushes whatever was buffered.
pub struct RunWriter {
    output_root: PathBuf,
    sinks: Vec<SplitSink>,
}

impl RunWriter {
    /// Create the output tree and open the aggregate manifest files, writing
    /// the info header to each split.
    pub fn create(output_root: &Path) -> Result<Self> {
        let mut sinks = Vec::with_capacity(Split::ALL.len());
        for split in Split::ALL {
            fs::create_dir_all(output_root.join(split.as_str())).with_context(|| {
                format!("failed to create output folder for split {}", split.as_str())
            })?;

            let trans_path = output_root.join(format!("{}.trans", split.as_str()));
            let info_path = output_root.join(format!("{}.info", split.as_str()));
            let trans = BufWriter::new(File::create(&trans_path).with_context(|| {
                format!("failed to create manifest file {:?}", trans_path)
            })?);
            let mut info = BufWriter::new(File::create(&info_path).with_context(|| {
                format!("failed to create info file {:?}", info_path)
            })?);
            writeln!(info, "file_id segment_id start end duration")
                .with_context(|| format!("failed to write header to {:?}", info_path))?;

            sinks.push(SplitSink { split, trans, info });
        }
        Ok(Self {
            output_root: output_root.to_path_buf(),
            sinks,
        })
    }

    /// Write every artifact for one recording's final segments, in order.
    ///
    /// Audio extraction is best effort: a failed sox invocation is logged and
    /// skipped while the text artifacts and manifest lines are still written.
    /// Existing artifacts are never overwritten.
    pub fn write_recording(
        &mut self,
        recording: &Recording,
        split: Split,
        segments: &[FlatSegment],
    ) -> Result<()> {
        let segment_dir = self
            .output_root
            .join(split.as_str())
            .join(&recording.id);
        fs::create_dir_all(&segment_dir)
            .with_context(|| format!("failed to create segment folder {:?}", segment_dir))?;

        for (idx, segment) in segments.iter().enumerate() {
            let basename = format!(
                "{}_{}_{}",
                recording.id,
                idx,
                format_seconds(segment.duration)
            );
            let wav_path = segment_dir.join(format!("{}.wav", basename));

            if let Err(err) =
                extract_segment(&recording.audio_path, &wav_path, segment.start, segment.duration)
            {
                warn!(
                    error = %err,
                    path = %wav_path.display(),
                    "audio extraction failed; keeping text artifacts and manifest entry"
                );
            }

            write_once(
                &segment_dir.join(format!("{}_norm.txt", basename)),
                &segment.text_norm,
            )?;
            write_once(&segment_dir.join(format!("{}.txt", basename)), &segment.text)?;

            let sink = self.sink_mut(split);
            writeln!(sink.trans, "{}\t{}", wav_path.display(), segment.text_norm)
                .context("failed to append manifest line")?;
            writeln!(
                sink.info,
                "{}\t{}\t{}\t{}\t{}",
                recording.id,
                basename,
                format_seconds(segment.start),
                format_seconds(segment.end),
                format_seconds(segment.duration)
            )
            .context("failed to append info line")?;
        }
        Ok(())
    }

    /// Flush and close every sink, returning the manifest paths.
    pub fn finish(mut self) -> Result<ManifestPaths> {
        for sink in &mut self.sinks {
            sink.trans
                .flush()
                .with_context(|| format!("failed to flush {}.trans", sink.split.as_str()))?;
            sink.info
                .flush()
                .with_context(|| format!("failed to flush {}.info", sink.split.as_str()))?;
        }
        Ok(ManifestPaths::for_root(&self.output_root))
    }

    fn sink_mut(&mut self, split: Split) -> &mut SplitSink {
        self.sinks
            .iter_mut()
            .find(|sink| sink.split == split)
            .expect("a sink exists for every split")
    }
}

/// Write a text artifact unless it already exists.
fn write_once(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        info!(path = %path.display(), "text artifact exists, leaving it unchanged");
        return Ok(());
    }
    fs::write(path, contents).with_context(|| format!("failed to write {:?}", path))
}

/// Render a seconds value the way the manifests expect: at least one decimal
/// place and at most two ("14.0", "3.25", "0.5").
pub(crate) fn format_seconds(value: f64) -> String {
    let mut rendered = format!("{:.2}", value);
    if rendered.ends_with('0') && !rendered.ends_with(".0") {
        rendered.pop();
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_keep_one_to_two_decimals() {
        assert_eq!(format_seconds(14.0), "14.0");
        assert_eq!(format_seconds(3.25), "3.25");
        assert_eq!(format_seconds(3.2), "3.2");
        assert_eq!(format_seconds(0.0), "0.0");
    }

    #[test]
    fn manifest_paths_detect_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ManifestPaths::for_root(dir.path());
        assert!(!paths.any_exists());
        fs::write(&paths.train, "").unwrap();
        assert!(paths.any_exists());
    }

    #[test]
    fn write_once_does_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seg.txt");
        write_once(&path, "first").unwrap();
        write_once(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }
}
