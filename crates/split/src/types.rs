//! Splitting data types.

use serde::{Deserialize, Serialize};

/// One page of an extracted document, as produced by the parsing stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number within the source document
    pub page_num: u32,

    /// Starting position of this page's text, in characters, within the
    /// concatenation of all page texts. Strictly increasing across a
    /// document's page list.
    pub offset: usize,

    /// Extracted text of the page
    pub text: String,
}

impl Page {
    /// Create a new page record.
    pub fn new(page_num: u32, offset: usize, text: impl Into<String>) -> Self {
        Self {
            page_num,
            offset,
            text: text.into(),
        }
    }
}

/// A section of a document that has been split into a smaller piece,
/// sized for an embedding model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Page the section's first character falls on
    pub page_num: u32,

    /// Contiguous substring of the document text
    pub text: String,
}
