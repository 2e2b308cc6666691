//! Sliding-window section emission.
//!
//! [`SectionSplitter`] walks the concatenated page text one window at a
//! time: the window end is snapped forward to a sentence or word boundary,
//! the window start is snapped backward so sections do not begin
//! mid-sentence, and the next window begins `section_overlap` characters
//! before the current end. A section that ends inside an unclosed markup
//! table instead re-includes the table from its opening tag, so tables are
//! not silently split across sections.

use crate::boundary::{snap_end, snap_start};
use crate::config::SplitConfig;
use crate::pages::PageIndex;
use crate::types::{Page, Section};
use docprep_core::AppResult;

const TABLE_OPEN: &str = "<table";
const TABLE_CLOSE: &str = "</table";

/// Splits page lists into overlapping, bounded-length sections.
pub struct SectionSplitter {
    config: SplitConfig,
}

impl SectionSplitter {
    /// Create a splitter, rejecting configurations that cannot make
    /// forward progress.
    pub fn new(config: SplitConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Lazily split `pages` into sections.
    ///
    /// Each call restarts from the beginning of the document; the returned
    /// iterator computes one section per `next()` and may be dropped early
    /// without computing the remainder.
    pub fn split_pages(&self, pages: &[Page]) -> Sections<'_> {
        let text: Vec<char> = pages.iter().flat_map(|p| p.text.chars()).collect();
        let end = text.len();
        Sections {
            text,
            index: PageIndex::new(pages),
            config: &self.config,
            start: 0,
            end,
            emitted: 0,
            done: false,
        }
    }
}

impl Default for SectionSplitter {
    fn default() -> Self {
        Self {
            config: SplitConfig::default(),
        }
    }
}

/// Lazy iterator over a document's sections.
pub struct Sections<'a> {
    text: Vec<char>,
    index: PageIndex,
    config: &'a SplitConfig,
    /// Nominal start of the next window (pre-snap)
    start: usize,
    /// End of the most recently produced window
    end: usize,
    emitted: usize,
    done: bool,
}

impl Sections<'_> {
    /// Pick the next window's nominal start after emitting `[start, end)`.
    ///
    /// Default progression is `end - section_overlap`. If the emitted
    /// section contains a table opened after its last closing tag, and the
    /// opening tag sits more than `2 * sentence_search_limit` characters
    /// into the section, the next window starts at the opening tag so the
    /// table is re-included whole. Openings closer to the section start
    /// are ignored: re-including those would stall the window on tables
    /// longer than `max_section_length`. The default overlap point caps
    /// the regression either way.
    fn advance(&self, start: usize, end: usize) -> usize {
        let overlap_start = end.saturating_sub(self.config.section_overlap);
        let section = &self.text[start..end];

        if let Some(open) = rfind(section, TABLE_OPEN) {
            let close = rfind(section, TABLE_CLOSE);
            if open > 2 * self.config.sentence_search_limit && close.map_or(true, |c| open > c) {
                if self.config.verbose {
                    tracing::debug!(
                        "Section ends with unclosed table; next section re-includes it (offset {}, table at {})",
                        start,
                        start + open
                    );
                }
                return overlap_start.min(start + open);
            }
        }

        overlap_start
    }
}

impl Iterator for Sections<'_> {
    type Item = Section;

    fn next(&mut self) -> Option<Section> {
        if self.done {
            return None;
        }
        let length = self.text.len();

        if self.start + self.config.section_overlap < length {
            let end = snap_end(&self.text, self.start, self.config);
            let start = snap_start(&self.text, self.start, end, self.config);
            let text: String = self.text[start..end].iter().collect();
            let page_num = self.index.page_at(start);

            self.start = self.advance(start, end);
            self.end = end;
            self.emitted += 1;
            return Some(Section { page_num, text });
        }

        self.done = true;

        // Trailing section: the residue past the last window, when it is
        // longer than the overlap already shared with that window. A
        // document too short to enter the loop at all still produces one
        // whole-document section.
        if self.start + self.config.section_overlap < self.end || (self.emitted == 0 && length > 0)
        {
            let text: String = self.text[self.start..self.end].iter().collect();
            let page_num = self.index.page_at(self.start);
            return Some(Section { page_num, text });
        }

        None
    }
}

/// Last occurrence of `needle` in `haystack`, as a character offset.
fn rfind(haystack: &[char], needle: &str) -> Option<usize> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .rev()
        .find(|&i| haystack[i..i + needle.len()] == needle[..])
}
