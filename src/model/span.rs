//! Span and line types supplied by the layout source.

use serde::{Deserialize, Serialize};

/// A fragment of text sharing one font run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSpan {
    /// The text content
    pub text: String,

    /// Font size in points
    #[serde(rename = "size", alias = "font_size")]
    pub font_size: f64,

    /// Font name (e.g., "Helvetica-Bold")
    #[serde(rename = "font", alias = "font_name", default)]
    pub font_name: String,

    /// Baseline origin (x, y) in page coordinates, y growing downwards
    pub origin: (f64, f64),

    /// Advance width of the run, if the extractor reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl RawSpan {
    /// Create a new span without a width.
    pub fn new(
        text: impl Into<String>,
        font_size: f64,
        font_name: impl Into<String>,
        origin: (f64, f64),
    ) -> Self {
        Self {
            text: text.into(),
            font_size,
            font_name: font_name.into(),
            origin,
            width: None,
        }
    }

    /// Set the advance width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// X coordinate of the origin.
    pub fn x(&self) -> f64 {
        self.origin.0
    }

    /// Y coordinate of the origin.
    pub fn y(&self) -> f64 {
        self.origin.1
    }
}

/// One visual line: spans in reading order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLine {
    /// The spans in this line
    #[serde(default)]
    pub spans: Vec<RawSpan>,
}

impl RawLine {
    /// Create a line from spans.
    pub fn new(spans: Vec<RawSpan>) -> Self {
        Self { spans }
    }

    /// Concatenated span text, untrimmed.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Check if the line has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
