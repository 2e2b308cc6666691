//! Default splitter backed by the text-splitter crate.

use super::FixedSizeSplitter;
use docprep_core::{AppError, AppResult};
use text_splitter::{ChunkConfig, TextSplitter};

/// Recursive character splitter with overlap support.
pub struct RecursiveSplitter;

impl FixedSizeSplitter for RecursiveSplitter {
    fn split(&self, text: &str, chunk_size: usize, overlap: usize) -> AppResult<Vec<String>> {
        let config = ChunkConfig::new(chunk_size)
            .with_overlap(overlap)
            .map_err(|e| AppError::Config(format!("Invalid chunk config: {}", e)))?;
        let splitter = TextSplitter::new(config);

        Ok(splitter.chunks(text).map(str::to_string).collect())
    }
}
