//! Conversion of raw layout lines into normalized line records.

use crate::model::{LayoutPage, NormalizedLine, PageGeometry, RawLine};

/// Turns raw span lines into [`NormalizedLine`] records.
#[derive(Debug, Clone)]
pub struct Normalizer {
    bold_markers: Vec<String>,
}

impl Normalizer {
    /// Create a normalizer that treats fonts containing any marker as bold.
    pub fn new(bold_markers: Vec<String>) -> Self {
        Self { bold_markers }
    }

    /// Check whether a font name carries a bold-weight marker.
    pub fn is_bold_font(&self, font_name: &str) -> bool {
        self.bold_markers
            .iter()
            .any(|marker| font_name.contains(marker.as_str()))
    }

    /// Normalize one line. Returns `None` for lines without spans or text.
    pub fn normalize_line(
        &self,
        line: &RawLine,
        page: u32,
        geometry: PageGeometry,
    ) -> Option<NormalizedLine> {
        let first = line.spans.first()?;

        let text = line.text().trim().to_string();
        if text.is_empty() {
            return None;
        }

        let font_size = line
            .spans
            .iter()
            .map(|s| s.font_size)
            .reduce(f64::max);
        let is_bold = line.spans.iter().any(|s| self.is_bold_font(&s.font_name));
        let width: f64 = line.spans.iter().map(|s| s.width.unwrap_or(0.0)).sum();
        let y_norm = if geometry.height > 0.0 {
            Some(first.y() / geometry.height)
        } else {
            None
        };

        Some(NormalizedLine {
            text,
            font_size,
            is_bold,
            x: Some(first.x()),
            y_norm,
            width: Some(width),
            page_width: Some(geometry.width),
            page,
        })
    }

    /// Normalize every line of a page, in reading order.
    pub fn normalize_page(&self, page: &LayoutPage) -> Vec<NormalizedLine> {
        let geometry = page.geometry();
        page.lines()
            .filter_map(|line| self.normalize_line(line, page.number, geometry))
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(vec!["Bold".to_string()])
    }
}

/// Normalize one line with the default bold markers.
pub fn normalize_line(line: &RawLine, page: u32, geometry: PageGeometry) -> Option<NormalizedLine> {
    Normalizer::default().normalize_line(line, page, geometry)
}
