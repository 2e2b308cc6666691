//! Docprep Core Library
//!
//! This crate provides the foundational utilities for the docprep
//! ingestion toolchain:
//! - Error handling (`AppError`, `AppResult`)
//! - Logging infrastructure

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{AppError, AppResult};
