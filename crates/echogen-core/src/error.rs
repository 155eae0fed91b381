//! Unified error handling for echogen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with categories, fatality and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for echogen core operations.
#[derive(Debug, Error, Clone)]
pub enum EchogenError {
    /// Validation errors from the domain layer.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (environment, filesystem).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl EchogenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }

    /// Whether this error must abort the whole batch.
    ///
    /// Only a failed write of a single file is recoverable; everything else
    /// stops the run.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Application(ApplicationError::WriteFile { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Environment,
    Filesystem,
}

/// Convenient result type alias.
pub type EchogenResult<T> = Result<T, EchogenError>;
