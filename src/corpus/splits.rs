use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, ensure, Context, Result};

use crate::types::Split;

/// Mapping from recording id to its corpus split, loaded once per run.
#[derive(Debug, Default)]
pub struct SplitManifest {
    assignments: HashMap<String, Split>,
}

impl SplitManifest {
    /// Load the three split lists (`dev`, `train`, `test`) from a folder.
    ///
    /// Each file is a newline-separated list of recording ids. All three
    /// files must exist; a missing one aborts the run before any output is
    /// produced.
    pub fn load(folder: &Path) -> Result<Self> {
        ensure!(folder.is_dir(), "splits folder {:?} does not exist", folder);

        let mut assignments = HashMap::new();
        for split in Split::ALL {
            let path = folder.join(split.as_str());
            ensure!(path.is_file(), "split file {:?} does not exist", path);
            let data = fs::read_to_string(&path)
                .with_context(|| format!("failed to read split file {:?}", path))?;
            for line in data.lines() {
                let id = line.trim();
                if !id.is_empty() {
                    assignments.insert(id.to_string(), split);
                }
            }
        }
        Ok(Self { assignments })
    }

    /// Split for a recording id. A recording absent from every split list is
    /// a fatal precondition failure for the run.
    pub fn split_for(&self, recording_id: &str) -> Result<Split> {
        self.assignments
            .get(recording_id)
            .copied()
            .ok_or_else(|| anyhow!("recording {} is not listed in any split file", recording_id))
    }
}
