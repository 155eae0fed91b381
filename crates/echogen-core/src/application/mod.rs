//! Application layer for echogen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Validation and template rendering live in `crate::domain`; this layer only
//! decides where files go and what happens when writing them fails.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    FileOutcome, FileStatus,
    GenerationReport, // DTO returned by generate_all
    ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
