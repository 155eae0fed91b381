//! Per-run outcome of a scaffold.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{FeatureName, Layer};

/// Result of writing one template file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub filename: String,
    pub layer: Layer,
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self.status, FileStatus::Written)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Written,
    Failed { reason: String },
}

/// Everything `generate_all` did, in the order it did it.
///
/// Per-file failures land here instead of aborting the run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub feature: FeatureName,
    pub directory: PathBuf,
    /// `true` when the feature directory was already present before the run.
    pub directory_existed: bool,
    pub files: Vec<FileOutcome>,
    pub generated_at: DateTime<Utc>,
}

impl GenerationReport {
    pub fn written(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| f.is_written())
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| !f.is_written())
    }

    pub fn is_complete(&self) -> bool {
        self.files.iter().all(FileOutcome::is_written)
    }
}
