//! Page-aware text splitting for document ingestion.
//!
//! Turns the extracted text of a multi-page document into a sequence of
//! overlapping, bounded-length sections suitable for embedding and
//! indexing, preserving the page number each section starts on.

mod boundary;

pub mod chapters;
pub mod config;
pub mod pages;
pub mod section;
pub mod splitters;
pub mod types;

// Re-export commonly used types
pub use chapters::{ChapterSplitter, ChapterTable};
pub use config::SplitConfig;
pub use section::{SectionSplitter, Sections};
pub use splitters::{FixedSizeSplitter, RecursiveSplitter};
pub use types::{Page, Section};
