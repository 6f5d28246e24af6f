//! Layout input: the source abstraction and line normalization.

mod normalize;
mod source;

pub use normalize::{normalize_line, Normalizer};
pub use source::LayoutSource;
