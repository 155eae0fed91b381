use thiserror::Error;

/// Root domain error type.
///
/// Domain errors are pure validation failures: they are raised before any
/// filesystem access happens and never carry I/O state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Feature name cannot be empty")]
    EmptyFeatureName,

    #[error("Invalid feature name '{name}': {reason}")]
    InvalidFeatureName { name: String, reason: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyFeatureName => vec![
                "Pass a feature name with -f, e.g. `echogen -f order`".into(),
                "The name becomes both the directory and the Go package".into(),
            ],
            Self::InvalidFeatureName { name, reason } => vec![
                format!("'{}' was rejected: {}", name, reason),
                "Prefer a Go identifier such as `order` or `userprofile`".into(),
                "Names like `my-feature` are accepted, but the generated `package` line will not compile"
                    .into(),
            ],
        }
    }
}
