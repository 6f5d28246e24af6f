//! Normalized line records and heading candidates.

use serde::{Deserialize, Serialize};

/// A layout-agnostic line record, the sole input to heading detection.
///
/// `text` is never empty; lines without text are dropped during
/// normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLine {
    /// Concatenated, trimmed text
    pub text: String,

    /// Largest font size on the line
    pub font_size: Option<f64>,

    /// Whether any span uses a bold font
    pub is_bold: bool,

    /// X origin of the first span
    pub x: Option<f64>,

    /// Vertical position of the first span (0 = top, 1 = bottom)
    pub y_norm: Option<f64>,

    /// Summed span width
    pub width: Option<f64>,

    /// Width of the page the line sits on
    pub page_width: Option<f64>,

    /// Page number (1-indexed)
    pub page: u32,
}

impl NormalizedLine {
    /// Create a line with text only and no layout signals.
    pub fn new(text: impl Into<String>, page: u32) -> Self {
        Self {
            text: text.into(),
            font_size: None,
            is_bold: false,
            x: None,
            y_norm: None,
            width: None,
            page_width: None,
            page,
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set the bold flag.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.is_bold = bold;
        self
    }

    /// Set the normalized vertical position.
    pub fn with_y_norm(mut self, y_norm: f64) -> Self {
        self.y_norm = Some(y_norm);
        self
    }

    /// Set horizontal placement: x origin, line width and page width.
    pub fn with_placement(mut self, x: f64, width: f64, page_width: f64) -> Self {
        self.x = Some(x);
        self.width = Some(width);
        self.page_width = Some(page_width);
        self
    }

    /// Horizontal centre of the line as a fraction of the page width.
    pub fn center_ratio(&self) -> Option<f64> {
        match (self.x, self.width, self.page_width) {
            (Some(x), Some(width), Some(page_width)) => Some((x + width / 2.0) / page_width),
            _ => None,
        }
    }

    /// Number of whitespace-delimited words.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// A line accepted by the heading filter, before level assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingCandidate {
    /// Heading text
    pub text: String,
    /// Page number (1-indexed)
    pub page: u32,
}

impl HeadingCandidate {
    /// Create a new candidate.
    pub fn new(text: impl Into<String>, page: u32) -> Self {
        Self {
            text: text.into(),
            page,
        }
    }
}

impl From<NormalizedLine> for HeadingCandidate {
    fn from(line: NormalizedLine) -> Self {
        Self {
            text: line.text,
            page: line.page,
        }
    }
}
