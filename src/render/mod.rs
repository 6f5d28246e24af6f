//! Output rendering for document outlines.

mod json;

pub use json::{to_json, write_json, JsonFormat};
