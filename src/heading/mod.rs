//! Heading detection: the candidate filter and the title extractor.

mod filter;
pub mod text;
mod title;

pub use filter::{
    has_section_number, is_heading, layout_score, Acceptance, HeadingFilter, Rejection, Verdict,
};
pub use title::{
    document_stem, extract_title, fallback_title, find_title, DEFAULT_TITLE_SCAN_LINES,
};
