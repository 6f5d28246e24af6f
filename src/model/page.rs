//! Page-level layout types.

use super::RawLine;
use serde::{Deserialize, Serialize};

/// Page dimensions in points (1 point = 1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width
    pub width: f64,
    /// Page height
    pub height: f64,
}

impl PageGeometry {
    /// Create a new geometry.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Standard Letter size (8.5 x 11 inches).
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    /// Standard A4 size (210 x 297 mm).
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }
}

/// A group of lines as reported by the layout source.
///
/// Image blocks carry no lines and deserialize to an empty block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutBlock {
    /// Lines in reading order
    #[serde(default)]
    pub lines: Vec<RawLine>,
}

impl LayoutBlock {
    /// Create a block from lines.
    pub fn new(lines: Vec<RawLine>) -> Self {
        Self { lines }
    }
}

/// A single page of layout data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPage {
    /// Extractor's page label (1-indexed); 0 means "assign from position".
    /// Outline entries use the page's position instead.
    #[serde(default)]
    pub number: u32,

    /// Page width in points
    pub width: f64,

    /// Page height in points
    pub height: f64,

    /// Plain reading-order text, if the extractor supplied it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Blocks on the page
    #[serde(default)]
    pub blocks: Vec<LayoutBlock>,
}

impl LayoutPage {
    /// Create a new empty page.
    pub fn new(number: u32, geometry: PageGeometry) -> Self {
        Self {
            number,
            width: geometry.width,
            height: geometry.height,
            text: None,
            blocks: Vec::new(),
        }
    }

    /// Create a new Letter-sized page.
    pub fn letter(number: u32) -> Self {
        Self::new(number, PageGeometry::letter())
    }

    /// Add a block to the page.
    pub fn add_block(&mut self, block: LayoutBlock) {
        self.blocks.push(block);
    }

    /// Add a single line as its own block.
    pub fn add_line(&mut self, line: RawLine) {
        self.blocks.push(LayoutBlock::new(vec![line]));
    }

    /// Set the plain reading-order text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Page geometry.
    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::new(self.width, self.height)
    }

    /// All lines on the page in reading order.
    pub fn lines(&self) -> impl Iterator<Item = &RawLine> {
        self.blocks.iter().flat_map(|b| b.lines.iter())
    }

    /// Plain text of the page.
    ///
    /// Falls back to one line per layout line when the extractor did not
    /// supply reading-order text.
    pub fn plain_text(&self) -> String {
        match self.text {
            Some(ref text) => text.clone(),
            None => self
                .lines()
                .map(RawLine::text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// Check if the page has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines().next().is_none()
    }
}
