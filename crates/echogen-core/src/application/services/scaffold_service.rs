//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole scaffolding workflow:
//! 1. Validate the feature name
//! 2. Render the template set
//! 3. For every file: resolve `<base>/<feature>`, ensure it exists, write
//!
//! Error policy: a missing working directory or a directory that cannot be
//! created aborts the batch with `Err`. A file that cannot be written is
//! logged, recorded in the [`GenerationReport`], and the batch moves on.

use std::path::PathBuf;

use chrono::Utc;
use tracing::{debug, error, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        services::report::{FileOutcome, FileStatus, GenerationReport},
    },
    domain::{FeatureName, TemplateFile, TemplateSet},
    error::{EchogenError, EchogenResult},
};

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    base_dir: Option<PathBuf>,
}

impl ScaffoldService {
    /// Create a new scaffold service writing under the filesystem's current
    /// directory.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            base_dir: None,
        }
    }

    /// Write feature directories under `base_dir` instead of the current
    /// directory.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Generate the complete feature slice for `feature`.
    ///
    /// Returns `Err` for validation failures and fatal environment/directory
    /// failures. Individual write failures are reported in the returned
    /// [`GenerationReport`].
    #[instrument(skip(self))]
    pub fn generate_all(&self, feature: &str) -> EchogenResult<GenerationReport> {
        let feature = FeatureName::parse(feature)?;
        let set = TemplateSet::for_feature(&feature);

        let directory = self.feature_dir(&feature)?;
        let directory_existed = self.filesystem.exists(&directory);
        if directory_existed {
            debug!(
                path = %directory.display(),
                "Feature directory exists, files will be overwritten"
            );
        }

        info!("--> START");
        let mut files = Vec::with_capacity(set.len());
        for file in &set {
            files.push(self.generate_file(&feature, file)?);
        }
        info!("<-- END");

        Ok(GenerationReport {
            feature,
            directory,
            directory_existed,
            files,
            generated_at: Utc::now(),
        })
    }

    /// Generate a single file of `feature`'s slice.
    ///
    /// An unknown `filename` is an explicit
    /// [`ApplicationError::TemplateNotFound`], never an empty file.
    #[instrument(skip(self))]
    pub fn generate_one(&self, feature: &str, filename: &str) -> EchogenResult<FileOutcome> {
        let feature = FeatureName::parse(feature)?;
        let set = TemplateSet::for_feature(&feature);

        let file = set
            .get(filename)
            .ok_or_else(|| ApplicationError::TemplateNotFound {
                feature: feature.to_string(),
                filename: filename.to_string(),
            })?;

        self.generate_file(&feature, file)
    }

    /// Paths `generate_all` would write, without touching the filesystem
    /// beyond resolving the working directory.
    pub fn plan(&self, feature: &str) -> EchogenResult<Vec<PathBuf>> {
        let feature = FeatureName::parse(feature)?;
        let directory = self.feature_dir(&feature)?;

        Ok(TemplateSet::for_feature(&feature)
            .filenames()
            .map(|name| directory.join(name))
            .collect())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn feature_dir(&self, feature: &FeatureName) -> EchogenResult<PathBuf> {
        let base = match &self.base_dir {
            Some(dir) => dir.clone(),
            None => self.filesystem.current_dir()?,
        };
        Ok(base.join(feature.as_str()))
    }

    fn generate_file(
        &self,
        feature: &FeatureName,
        file: &TemplateFile,
    ) -> EchogenResult<FileOutcome> {
        let directory = self.feature_dir(feature)?;
        self.filesystem.create_dir_all(&directory)?;

        let path = directory.join(&file.filename);
        let status = match self.filesystem.write_file(&path, &file.content) {
            Ok(()) => {
                info!(file = %file.filename, "Generate file {} success", file.filename);
                FileStatus::Written
            }
            Err(e) if !e.is_fatal() => {
                error!(file = %file.filename, error = %e, "Generate file error");
                FileStatus::Failed {
                    reason: reason_of(&e),
                }
            }
            Err(e) => return Err(e),
        };

        Ok(FileOutcome {
            filename: file.filename.clone(),
            layer: file.layer,
            path,
            status,
        })
    }
}

fn reason_of(err: &EchogenError) -> String {
    match err {
        EchogenError::Application(ApplicationError::WriteFile { reason, .. }) => reason.clone(),
        other => other.to_string(),
    }
}
