//! Document-level types: the layout input and the outline output.

use super::LayoutPage;
use serde::{Deserialize, Serialize};

/// Layout data for a whole document, as produced by a layout extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutDocument {
    /// Pages in document order
    pub pages: Vec<LayoutPage>,
}

impl LayoutDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Create a document from pages, numbering any unnumbered page by position.
    pub fn from_pages(pages: Vec<LayoutPage>) -> Self {
        let mut doc = Self { pages };
        doc.assign_page_numbers();
        doc
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&LayoutPage> {
        self.pages.iter().find(|p| p.number == page_num)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, mut page: LayoutPage) {
        if page.number == 0 {
            page.number = self.page_count() + 1;
        }
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Give every page with number 0 its 1-based position.
    pub(crate) fn assign_page_numbers(&mut self) {
        for (idx, page) in self.pages.iter_mut().enumerate() {
            if page.number == 0 {
                page.number = idx as u32 + 1;
            }
        }
    }
}

/// The finished outline of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Document title
    pub title: String,

    /// Headings in document order
    pub outline: Vec<OutlineEntry>,
}

impl DocumentOutline {
    /// Create an outline with a title and no headings.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            outline: Vec::new(),
        }
    }

    /// Add an entry to the outline.
    pub fn add_entry(&mut self, entry: OutlineEntry) {
        self.outline.push(entry);
    }

    /// Check if no headings were found.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    /// Get the number of headings.
    pub fn len(&self) -> usize {
        self.outline.len()
    }
}

/// A single leveled heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Level label (e.g., "H1")
    pub level: String,

    /// Heading text
    pub text: String,

    /// Page number (1-indexed)
    pub page: u32,
}

impl OutlineEntry {
    /// Create a new outline entry.
    pub fn new(level: impl Into<String>, text: impl Into<String>, page: u32) -> Self {
        Self {
            level: level.into(),
            text: text.into(),
            page,
        }
    }
}
