//! Outline options and heading-detection thresholds.

use crate::heading::DEFAULT_TITLE_SCAN_LINES;

/// Thresholds used by the heading candidate filter.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingConfig {
    /// Lines with more words than this are prose
    pub max_words: usize,

    /// Lines containing a period with more words than this are prose
    pub max_sentence_words: usize,

    /// Minimum layout score for a line that no rule decided
    pub min_score: f64,

    /// Font size (points) at or above which a line scores as large
    pub large_font_size: f64,

    /// Lines whose normalized y is below this sit near the top of the page
    pub top_region: f64,

    /// Exclusive bounds of the centre band, as fractions of page width
    pub center_band: (f64, f64),

    /// Fraction of capitalized words above which a line scores as capitalized
    pub capitalized_ratio: f64,
}

impl HeadingConfig {
    /// Create a config with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum layout score.
    pub fn with_min_score(mut self, score: f64) -> Self {
        self.min_score = score;
        self
    }

    /// Set the maximum heading word count.
    pub fn with_max_words(mut self, words: usize) -> Self {
        self.max_words = words;
        self
    }

    /// Set the large-font threshold.
    pub fn with_large_font_size(mut self, size: f64) -> Self {
        self.large_font_size = size;
        self
    }
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            max_words: 15,
            max_sentence_words: 8,
            min_score: 0.5,
            large_font_size: 12.0,
            top_region: 0.3,
            center_band: (0.45, 0.55),
            capitalized_ratio: 0.7,
        }
    }
}

/// Options for building an outline.
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    /// Heading filter thresholds
    pub heading: HeadingConfig,

    /// Substrings of a font name that mark it as bold
    pub bold_markers: Vec<String>,

    /// How many leading lines of page 1 to consider for the title
    pub title_scan_lines: usize,
}

impl OutlineOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set heading thresholds.
    pub fn with_heading_config(mut self, config: HeadingConfig) -> Self {
        self.heading = config;
        self
    }

    /// Replace the bold font markers.
    pub fn with_bold_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bold_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the number of page-1 lines scanned for a title.
    pub fn with_title_scan_lines(mut self, lines: usize) -> Self {
        self.title_scan_lines = lines;
        self
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            heading: HeadingConfig::default(),
            bold_markers: vec!["Bold".to_string()],
            title_scan_lines: DEFAULT_TITLE_SCAN_LINES,
        }
    }
}
