//! Error types for pdfoutline.

use std::io;
use thiserror::Error;

/// Result type alias for pdfoutline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building an outline.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The layout dump could not be read or decoded.
    #[error("Layout error: {0}")]
    Layout(String),

    /// The layout source has no pages.
    #[error("Document has no pages")]
    NoPages,

    /// The classifier model is malformed or inconsistent.
    #[error("Invalid classifier model: {0}")]
    Model(String),

    /// Level classification failed for a document.
    #[error("Classifier error: {0}")]
    Classifier(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
