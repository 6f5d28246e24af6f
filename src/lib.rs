//! # pdfoutline
//!
//! Heading detection and outline extraction from PDF page layout.
//!
//! The crate takes positioned text spans, as produced by any PDF layout
//! extractor, and turns them into a document title plus a flat, leveled
//! outline of headings.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfoutline::{Outliner, JsonFormat};
//!
//! fn main() -> pdfoutline::Result<()> {
//!     // Outline a layout dump with section-numbering levels
//!     let outline = Outliner::new().outline_file("report.layout.json")?;
//!     println!("{}", outline.title);
//!
//!     // Or use a fitted classifier model
//!     let json = Outliner::new()
//!         .with_model("heading_classifier.json")?
//!         .to_json("report.layout.json", JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Normalizer**: raw span lines become [`NormalizedLine`] records
//! - **Heading filter**: reject rules, accept rules, then a layout score
//! - **Title extractor**: first qualifying page-1 line, or the file name
//! - **Level classifier**: one batch prediction per document
//! - **Outline builder**: ties the stages together
//!
//! Documents are independent; [`batch::run_batch`] processes a directory
//! in parallel with Rayon.

pub mod batch;
pub mod classify;
pub mod error;
pub mod heading;
pub mod layout;
pub mod model;
pub mod options;
pub mod outline;
pub mod render;

// Re-export commonly used types
pub use batch::{discover_inputs, run_batch, BatchConfig, BatchReport};
pub use classify::{load_classifier, LevelClassifier, NumberingClassifier, TfidfClassifier};
pub use error::{Error, Result};
pub use heading::{extract_title, is_heading, layout_score, HeadingFilter, Verdict};
pub use layout::{normalize_line, LayoutSource, Normalizer};
pub use model::{
    DocumentOutline, HeadingCandidate, LayoutBlock, LayoutDocument, LayoutPage, NormalizedLine,
    OutlineEntry, PageGeometry, RawLine, RawSpan,
};
pub use options::{HeadingConfig, OutlineOptions};
pub use outline::OutlineBuilder;
pub use render::JsonFormat;

use std::path::Path;

/// Outline a layout dump file.
///
/// The file stem (without `.layout`/`.pdf`) is the fallback title.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::{outline_file, NumberingClassifier};
///
/// let outline = outline_file("report.layout.json", &NumberingClassifier::default()).unwrap();
/// for entry in &outline.outline {
///     println!("{} {} (p. {})", entry.level, entry.text, entry.page);
/// }
/// ```
pub fn outline_file<P: AsRef<Path>>(
    path: P,
    classifier: &dyn LevelClassifier,
) -> Result<DocumentOutline> {
    let path = path.as_ref();
    let document = LayoutDocument::open(path)?;
    outline_document(&document, &heading::document_stem(path), classifier)
}

/// Outline an in-memory layout document.
pub fn outline_document(
    document: &LayoutDocument,
    fallback_name: &str,
    classifier: &dyn LevelClassifier,
) -> Result<DocumentOutline> {
    OutlineBuilder::new(classifier).build_from_source(document, fallback_name)
}

/// Builder bundling a classifier with outline options.
///
/// # Example
///
/// ```no_run
/// use pdfoutline::Outliner;
///
/// let outline = Outliner::new()
///     .with_min_score(0.6)
///     .with_bold_markers(["Bold", "Black"])
///     .outline_file("report.layout.json")?;
/// # Ok::<(), pdfoutline::Error>(())
/// ```
pub struct Outliner {
    classifier: Box<dyn LevelClassifier>,
    options: OutlineOptions,
}

impl Outliner {
    /// Create an outliner with section-numbering levels.
    pub fn new() -> Self {
        Self {
            classifier: Box::new(NumberingClassifier::default()),
            options: OutlineOptions::default(),
        }
    }

    /// Use a specific classifier.
    pub fn with_classifier<C: LevelClassifier + 'static>(mut self, classifier: C) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Load a TF-IDF classifier model.
    pub fn with_model<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        self.classifier = Box::new(TfidfClassifier::open(path)?);
        Ok(self)
    }

    /// Replace all outline options.
    pub fn with_options(mut self, options: OutlineOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the minimum layout score for a heading.
    pub fn with_min_score(mut self, score: f64) -> Self {
        self.options.heading = self.options.heading.with_min_score(score);
        self
    }

    /// Set the font-name markers that indicate bold weight.
    pub fn with_bold_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.with_bold_markers(markers);
        self
    }

    /// The classifier in use.
    pub fn classifier(&self) -> &dyn LevelClassifier {
        self.classifier.as_ref()
    }

    /// Create an [`OutlineBuilder`] borrowing this outliner's classifier.
    pub fn builder(&self) -> OutlineBuilder<'_> {
        OutlineBuilder::with_options(self.classifier.as_ref(), self.options.clone())
    }

    /// Outline a layout dump file.
    pub fn outline_file<P: AsRef<Path>>(&self, path: P) -> Result<DocumentOutline> {
        let path = path.as_ref();
        let document = LayoutDocument::open(path)?;
        self.builder()
            .build_from_source(&document, &heading::document_stem(path))
    }

    /// Outline in-memory pages.
    pub fn outline_pages(&self, pages: &[LayoutPage], fallback_name: &str) -> Result<DocumentOutline> {
        self.builder().build(pages, fallback_name)
    }

    /// Outline a layout dump file and render it as JSON.
    pub fn to_json<P: AsRef<Path>>(&self, path: P, format: JsonFormat) -> Result<String> {
        let outline = self.outline_file(path)?;
        render::to_json(&outline, format)
    }
}

impl Default for Outliner {
    fn default() -> Self {
        Self::new()
    }
}
