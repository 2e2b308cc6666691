//! Splitter configuration.

use docprep_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Configuration for the section splitter.
///
/// All fields have defaults tuned for prose extracted from office
/// documents; override them per corpus if needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Target section length in characters
    #[serde(default = "default_max_section_length")]
    pub max_section_length: usize,

    /// How far past the target a boundary search may scan
    #[serde(default = "default_sentence_search_limit")]
    pub sentence_search_limit: usize,

    /// Characters shared between the end of one section and the start of
    /// the next
    #[serde(default = "default_section_overlap")]
    pub section_overlap: usize,

    /// Characters treated as sentence terminators (preferred cut points)
    #[serde(default = "default_sentence_endings")]
    pub sentence_endings: Vec<char>,

    /// Characters treated as word breaks (fallback cut points)
    #[serde(default = "default_word_breaks")]
    pub word_breaks: Vec<char>,

    /// Emit per-section diagnostics. No behavioral effect.
    #[serde(default)]
    pub verbose: bool,
}

fn default_max_section_length() -> usize {
    1000
}

fn default_sentence_search_limit() -> usize {
    100
}

fn default_section_overlap() -> usize {
    100
}

fn default_sentence_endings() -> Vec<char> {
    vec!['.', '!', '?']
}

fn default_word_breaks() -> Vec<char> {
    vec![
        ',', ';', ':', ' ', '(', ')', '[', ']', '{', '}', '\t', '\n',
    ]
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_section_length: default_max_section_length(),
            sentence_search_limit: default_sentence_search_limit(),
            section_overlap: default_section_overlap(),
            sentence_endings: default_sentence_endings(),
            word_breaks: default_word_breaks(),
            verbose: false,
        }
    }
}

impl SplitConfig {
    /// Validate that the configuration guarantees forward progress.
    ///
    /// Each loop iteration advances the window start by at least
    /// `max_section_length - section_overlap - sentence_search_limit`
    /// characters; that quantity must be strictly positive or splitting a
    /// long document would never terminate.
    pub fn validate(&self) -> AppResult<()> {
        if self.max_section_length <= self.section_overlap + self.sentence_search_limit {
            return Err(AppError::Config(format!(
                "max_section_length ({}) must exceed section_overlap ({}) + sentence_search_limit ({})",
                self.max_section_length, self.section_overlap, self.sentence_search_limit
            )));
        }
        Ok(())
    }

    pub(crate) fn is_sentence_ending(&self, c: char) -> bool {
        self.sentence_endings.contains(&c)
    }

    pub(crate) fn is_word_break(&self, c: char) -> bool {
        self.word_breaks.contains(&c)
    }
}
