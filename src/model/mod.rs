//! Document model types.
//!
//! Layout types (`LayoutDocument`, `LayoutPage`, `RawLine`, `RawSpan`) describe
//! what the layout source supplies; `NormalizedLine` and `HeadingCandidate`
//! are the intermediate records of heading detection; `DocumentOutline` is
//! the output.

mod document;
mod line;
mod page;
mod span;

pub use document::{DocumentOutline, LayoutDocument, OutlineEntry};
pub use line::{HeadingCandidate, NormalizedLine};
pub use page::{LayoutBlock, LayoutPage, PageGeometry};
pub use span::{RawLine, RawSpan};
