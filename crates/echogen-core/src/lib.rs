//! Echogen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the echogen
//! feature-slice scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           echogen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (Driven: Filesystem)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    echogen-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (FeatureName, TemplateSet, Layer)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use echogen_core::application::ScaffoldService;
//!
//! // Inject any `Filesystem` adapter
//! let service = ScaffoldService::new(Box::new(filesystem));
//! let report = service.generate_all("order").unwrap();
//! assert_eq!(report.files.len(), 7);
//! ```

pub mod domain;

pub mod application;

pub mod error;
