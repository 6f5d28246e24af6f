//! Outline assembly: title, candidates, levels.

use crate::classify::LevelClassifier;
use crate::error::{Error, Result};
use crate::heading::{fallback_title, find_title, HeadingFilter};
use crate::layout::{LayoutSource, Normalizer};
use crate::model::{DocumentOutline, HeadingCandidate, LayoutPage, NormalizedLine, OutlineEntry};
use crate::options::OutlineOptions;

/// Builds a [`DocumentOutline`] from layout pages.
///
/// The builder borrows a fitted classifier; one builder can process any
/// number of documents and is safe to share between threads.
pub struct OutlineBuilder<'c> {
    options: OutlineOptions,
    normalizer: Normalizer,
    filter: HeadingFilter,
    classifier: &'c dyn LevelClassifier,
}

impl<'c> OutlineBuilder<'c> {
    /// Create a builder with default options.
    pub fn new(classifier: &'c dyn LevelClassifier) -> Self {
        Self::with_options(classifier, OutlineOptions::default())
    }

    /// Create a builder with explicit options.
    pub fn with_options(classifier: &'c dyn LevelClassifier, options: OutlineOptions) -> Self {
        Self {
            normalizer: Normalizer::new(options.bold_markers.clone()),
            filter: HeadingFilter::new(options.heading.clone()),
            options,
            classifier,
        }
    }

    /// The options in use.
    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// The heading filter in use.
    pub fn filter(&self) -> &HeadingFilter {
        &self.filter
    }

    /// Document title from page-1 text, or from `fallback_name` when page 1
    /// is missing or has no qualifying line.
    pub fn title(&self, first_page_text: Option<&str>, fallback_name: &str) -> String {
        first_page_text
            .and_then(|text| find_title(text, self.options.title_scan_lines))
            .unwrap_or_else(|| fallback_title(fallback_name))
    }

    /// Normalized lines of every page, in reading order.
    pub fn normalized_lines(&self, pages: &[LayoutPage]) -> Vec<NormalizedLine> {
        pages
            .iter()
            .enumerate()
            .flat_map(|(idx, page)| {
                let number = page_position(idx);
                let geometry = page.geometry();
                page.lines()
                    .filter_map(move |line| self.normalizer.normalize_line(line, number, geometry))
            })
            .collect()
    }

    /// Lines accepted by the heading filter, in reading order.
    pub fn candidates(&self, pages: &[LayoutPage]) -> Vec<HeadingCandidate> {
        let mut candidates = Vec::new();

        for (idx, page) in pages.iter().enumerate() {
            let number = page_position(idx);
            let geometry = page.geometry();
            let before = candidates.len();

            candidates.extend(
                page.lines()
                    .filter_map(|line| self.normalizer.normalize_line(line, number, geometry))
                    .filter(|line| self.filter.is_heading(line))
                    .map(HeadingCandidate::from),
            );

            log::debug!(
                "Page {}: {} heading candidates",
                number,
                candidates.len() - before
            );
        }

        candidates
    }

    /// Build the outline of one document.
    pub fn build(&self, pages: &[LayoutPage], fallback_name: &str) -> Result<DocumentOutline> {
        let first_page_text = pages.first().map(LayoutPage::plain_text);
        if first_page_text.is_none() {
            log::warn!("No pages, using fallback title for {}", fallback_name);
        }
        let title = self.title(first_page_text.as_deref(), fallback_name);
        self.assemble(title, pages)
    }

    /// Build the outline of a document behind a [`LayoutSource`].
    ///
    /// An unreadable page 1 only affects the title; failing to read the
    /// pages fails the document.
    pub fn build_from_source(
        &self,
        source: &dyn LayoutSource,
        fallback_name: &str,
    ) -> Result<DocumentOutline> {
        let first_page_text = match source.first_page_text() {
            Ok(text) => Some(text),
            Err(e) => {
                log::warn!(
                    "Could not read page 1 ({}), using fallback title for {}",
                    e,
                    fallback_name
                );
                None
            }
        };
        let title = self.title(first_page_text.as_deref(), fallback_name);
        let pages = source.pages()?;
        self.assemble(title, &pages)
    }

    fn assemble(&self, title: String, pages: &[LayoutPage]) -> Result<DocumentOutline> {
        let candidates = self.candidates(pages);
        if candidates.is_empty() {
            log::info!("No heading candidates found for \"{}\"", title);
            return Ok(DocumentOutline::new(title));
        }

        let texts: Vec<String> = candidates.iter().map(|c| c.text.clone()).collect();
        let levels = self.classifier.predict(&texts)?;
        if levels.len() != candidates.len() {
            return Err(Error::Classifier(format!(
                "{} returned {} labels for {} headings",
                self.classifier.name(),
                levels.len(),
                candidates.len()
            )));
        }

        let mut outline = DocumentOutline::new(title);
        for (candidate, level) in candidates.into_iter().zip(levels) {
            outline.add_entry(OutlineEntry::new(level, candidate.text, candidate.page));
        }
        Ok(outline)
    }
}

/// Outline page numbers are 1-based positions in the page sequence. The
/// `number` carried by a layout page is not consulted.
fn page_position(idx: usize) -> u32 {
    idx as u32 + 1
}
