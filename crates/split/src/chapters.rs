//! Chapter-based splitting.
//!
//! Some corpora ship with known chapter boundaries (taken from each
//! document's table of contents). For those, sections are produced per
//! chapter instead of by the sliding window: the chapter's pages are
//! concatenated and handed to a generic fixed-size splitter, and every
//! resulting chunk is tagged with the chapter's first page.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use docprep_core::{AppError, AppResult};

use crate::splitters::{FixedSizeSplitter, RecursiveSplitter};
use crate::types::{Page, Section};

const CHAPTER_CHUNK_SIZE: usize = 1000;
const CHAPTER_CHUNK_OVERLAP: usize = 200;

/// Chapter-start pages per document identifier.
///
/// Page numbers are 1-based and strictly increasing; each chapter runs
/// from its start page up to the page before the next chapter's start,
/// the last one to the document's last page. The table is injected
/// configuration, typically loaded from a YAML file maintained alongside
/// the corpus.
#[derive(Debug, Clone, Default)]
pub struct ChapterTable {
    starts: HashMap<String, Vec<u32>>,
}

impl ChapterTable {
    /// Load a table from a YAML file mapping document ids to page lists.
    pub fn from_yaml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let starts: HashMap<String, Vec<u32>> = serde_yaml::from_str(&contents)?;
        Ok(Self { starts })
    }

    /// Chapter-start pages for `doc_id`, or `NotFound` if the document is
    /// not in the table.
    pub fn starts_for(&self, doc_id: &str) -> AppResult<&[u32]> {
        self.starts
            .get(doc_id)
            .map(Vec::as_slice)
            .ok_or_else(|| AppError::NotFound(format!("document '{}' has no chapter table", doc_id)))
    }
}

impl From<HashMap<String, Vec<u32>>> for ChapterTable {
    fn from(starts: HashMap<String, Vec<u32>>) -> Self {
        Self { starts }
    }
}

/// Splits documents along known chapter boundaries.
pub struct ChapterSplitter {
    table: ChapterTable,
    splitter: Box<dyn FixedSizeSplitter>,
}

impl ChapterSplitter {
    /// Create a splitter using the default recursive chunker.
    pub fn new(table: ChapterTable) -> Self {
        Self::with_splitter(table, Box::new(RecursiveSplitter))
    }

    /// Create a splitter delegating to a custom chunker.
    pub fn with_splitter(table: ChapterTable, splitter: Box<dyn FixedSizeSplitter>) -> Self {
        Self { table, splitter }
    }

    /// Split `pages` chapter by chapter.
    ///
    /// Fails with `NotFound` when `doc_id` is absent from the chapter
    /// table. Chapter ranges reaching past the page list are clamped to
    /// its end.
    pub fn split_pages(&self, doc_id: &str, pages: &[Page]) -> AppResult<Vec<Section>> {
        let starts = self.table.starts_for(doc_id)?;

        tracing::debug!("Splitting '{}' into {} chapters", doc_id, starts.len());

        let mut sections = Vec::new();
        for (idx, &chapter_start) in starts.iter().enumerate() {
            let begin = (chapter_start.saturating_sub(1) as usize).min(pages.len());
            let end = match starts.get(idx + 1) {
                Some(&next_start) => (next_start.saturating_sub(1) as usize).min(pages.len()),
                None => pages.len(),
            };

            let chapter_text = pages[begin..end.max(begin)]
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");

            for chunk in
                self.splitter
                    .split(&chapter_text, CHAPTER_CHUNK_SIZE, CHAPTER_CHUNK_OVERLAP)?
            {
                sections.push(Section {
                    page_num: chapter_start,
                    text: chunk,
                });
            }
        }

        Ok(sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Returns the whole text as one chunk; records nothing else.
    struct WholeTextSplitter;

    impl FixedSizeSplitter for WholeTextSplitter {
        fn split(&self, text: &str, _chunk_size: usize, _overlap: usize) -> AppResult<Vec<String>> {
            if text.is_empty() {
                Ok(vec![])
            } else {
                Ok(vec![text.to_string()])
            }
        }
    }

    fn table() -> ChapterTable {
        let mut starts = HashMap::new();
        starts.insert("manual.pdf".to_string(), vec![1, 3]);
        ChapterTable::from(starts)
    }

    fn pages() -> Vec<Page> {
        vec![
            Page::new(1, 0, "page one"),
            Page::new(2, 8, "page two"),
            Page::new(3, 16, "page three"),
            Page::new(4, 26, "page four"),
        ]
    }

    #[test]
    fn test_unknown_document_is_not_found() {
        let splitter = ChapterSplitter::new(table());
        let result = splitter.split_pages("missing.pdf", &pages());
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_chapters_are_tagged_with_start_page() {
        let splitter = ChapterSplitter::with_splitter(table(), Box::new(WholeTextSplitter));
        let sections = splitter.split_pages("manual.pdf", &pages()).unwrap();

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].page_num, 1);
        assert_eq!(sections[0].text, "page one page two");
        assert_eq!(sections[1].page_num, 3);
        assert_eq!(sections[1].text, "page three page four");
    }

    #[test]
    fn test_chapter_start_past_document_is_clamped() {
        let mut starts = HashMap::new();
        starts.insert("short.pdf".to_string(), vec![1, 9]);
        let splitter =
            ChapterSplitter::with_splitter(ChapterTable::from(starts), Box::new(WholeTextSplitter));
        let sections = splitter.split_pages("short.pdf", &pages()).unwrap();

        // The second chapter starts past the last page and contributes
        // nothing; the first covers the whole document.
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].page_num, 1);
    }

    #[test]
    fn test_long_chapter_produces_overlapping_chunks() {
        let mut starts = HashMap::new();
        starts.insert("long.pdf".to_string(), vec![1]);
        let splitter = ChapterSplitter::new(ChapterTable::from(starts));

        let text = "This is a sentence. ".repeat(150); // 3000 chars
        let sections = splitter
            .split_pages("long.pdf", &[Page::new(1, 0, text)])
            .unwrap();

        assert!(sections.len() > 1);
        for section in &sections {
            assert_eq!(section.page_num, 1);
            assert!(section.text.chars().count() <= 1000);
        }
    }

    #[test]
    fn test_table_loads_from_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "manual.pdf: [5, 11, 13]").unwrap();
        writeln!(file, "other.pdf: [1]").unwrap();

        let table = ChapterTable::from_yaml_file(file.path()).unwrap();
        assert_eq!(table.starts_for("manual.pdf").unwrap(), &[5, 11, 13]);
        assert_eq!(table.starts_for("other.pdf").unwrap(), &[1]);
        assert!(table.starts_for("absent.pdf").is_err());
    }
}
