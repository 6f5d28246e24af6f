//! Level classification of heading candidates.
//!
//! The outline builder treats the classifier as an opaque, already-fitted
//! function from heading text to a level label. Two implementations ship with
//! the crate:
//!
//! - [`TfidfClassifier`]: inference for an exported TF-IDF + linear model
//! - [`NumberingClassifier`]: model-free levels from section numbering
//!
//! # Example
//!
//! ```
//! use pdfoutline::classify::{LevelClassifier, NumberingClassifier};
//!
//! let classifier = NumberingClassifier::default();
//! let levels = classifier
//!     .predict(&["Introduction".to_string(), "1.1 Background".to_string()])
//!     .unwrap();
//! assert_eq!(levels, vec!["H1", "H2"]);
//! ```

mod numbering;
mod tfidf;

pub use numbering::NumberingClassifier;
pub use tfidf::{TfidfClassifier, TfidfModel};

use std::path::Path;

use crate::error::Result;

/// A fitted classifier mapping heading text to a level label.
///
/// Implementations are shared read-only across documents, possibly from
/// several threads at once.
pub trait LevelClassifier: Send + Sync {
    /// Short name for logs and diagnostics.
    fn name(&self) -> &str;

    /// Predict one level label per text, in input order.
    fn predict(&self, texts: &[String]) -> Result<Vec<String>>;
}

impl<C: LevelClassifier + ?Sized> LevelClassifier for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn predict(&self, texts: &[String]) -> Result<Vec<String>> {
        (**self).predict(texts)
    }
}

/// Load the TF-IDF model at `model_path`, or fall back to numbering levels.
pub fn load_classifier(model_path: Option<&Path>) -> Result<Box<dyn LevelClassifier>> {
    match model_path {
        Some(path) => {
            let classifier = TfidfClassifier::open(path)?;
            log::info!(
                "Loaded {} model from {} ({} classes)",
                classifier.name(),
                path.display(),
                classifier.model().classes.len()
            );
            Ok(Box::new(classifier))
        }
        None => {
            log::info!("No classifier model configured, using section numbering");
            Ok(Box::new(NumberingClassifier::default()))
        }
    }
}
