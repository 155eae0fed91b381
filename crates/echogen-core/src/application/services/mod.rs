//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a feature slice".

pub mod report;
pub mod scaffold_service;

pub use report::{FileOutcome, FileStatus, GenerationReport};
pub use scaffold_service::ScaffoldService;
