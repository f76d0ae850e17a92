use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use transcut::{run_segmentation, SegmentConfig};

/// Transcut - transcript-driven corpus segmentation tool
///
/// Cuts word-timestamped recordings into bounded-duration segments at
/// sentence boundaries and writes per-split ASR training manifests.
#[derive(Parser, Debug)]
#[command(name = "transcut")]
#[command(version = "0.1.0")]
#[command(about = "Transcript-driven corpus segmentation tool", long_about = None)]
struct Args {
    /// Folder of per-recording transcripts (<id>.json with sibling <id>.wav)
    #[arg(value_name = "RECORDINGS")]
    recordings_dir: PathBuf,

    /// Output directory for segment artifacts and split manifests
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: PathBuf,

    /// Folder containing the dev/train/test split lists
    #[arg(long, value_name = "DIR")]
    splits_dir: PathBuf,

    /// Minimum acceptable segment duration in seconds
    #[arg(long, default_value_t = 2.0)]
    min_duration: f64,

    /// Maximum acceptable segment duration in seconds
    #[arg(long, default_value_t = 20.0)]
    max_duration: f64,
}

impl Args {
    /// Validate CLI arguments
    fn validate(&self) -> Result<()> {
        if !self.recordings_dir.is_dir() {
            anyhow::bail!(
                "Recordings folder does not exist: {:?}",
                self.recordings_dir
            );
        }

        if !self.splits_dir.is_dir() {
            anyhow::bail!("Splits folder does not exist: {:?}", self.splits_dir);
        }

        if self.min_duration <= 0.0 {
            anyhow::bail!(
                "Minimum duration must be positive, got: {}",
                self.min_duration
            );
        }

        if self.max_duration <= self.min_duration {
            anyhow::bail!(
                "Maximum duration ({}) must be greater than minimum duration ({})",
                self.max_duration,
                self.min_duration
            );
        }

        if self.output_dir.exists() && !self.output_dir.is_dir() {
            anyhow::bail!("Output path must be a directory: {:?}", self.output_dir);
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    args.validate()
        .context("Failed to validate command-line arguments")?;

    let config = SegmentConfig::new(args.min_duration, args.max_duration);
    let manifests = run_segmentation(
        &args.recordings_dir,
        &args.output_dir,
        &args.splits_dir,
        config,
    )?;

    info!(
        dev = %manifests.dev.display(),
        train = %manifests.train.display(),
        test = %manifests.test.display(),
        "segmentation complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_duration_bounds() {
        let args = Args {
            recordings_dir: std::env::current_dir().unwrap(),
            output_dir: PathBuf::from("out"),
            splits_dir: std::env::current_dir().unwrap(),
            min_duration: 5.0,
            max_duration: 2.0,
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn default_durations_match_corpus_defaults() {
        let args = Args::try_parse_from([
            "transcut",
            "recordings",
            "out",
            "--splits-dir",
            "splits",
        ])
        .unwrap();
        assert_eq!(args.min_duration, 2.0);
        assert_eq!(args.max_duration, 20.0);
    }
}
