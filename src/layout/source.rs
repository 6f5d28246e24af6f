//! Layout source abstraction.
//!
//! The heading pipeline never decodes PDF containers itself. A
//! [`LayoutSource`] supplies pages of positioned spans; any extractor can sit
//! behind it. [`LayoutDocument`] is the in-crate implementation, loaded from
//! a JSON layout dump.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{LayoutDocument, LayoutPage};

/// Abstract interface for page layout access.
pub trait LayoutSource {
    /// Return all pages in document order.
    fn pages(&self) -> Result<Cow<'_, [LayoutPage]>>;

    /// Return the plain reading-order text of page 1.
    fn first_page_text(&self) -> Result<String> {
        let pages = self.pages()?;
        pages
            .first()
            .map(LayoutPage::plain_text)
            .ok_or(Error::NoPages)
    }
}

impl LayoutSource for LayoutDocument {
    fn pages(&self) -> Result<Cow<'_, [LayoutPage]>> {
        Ok(Cow::Borrowed(&self.pages))
    }
}

/// Accepted top-level shapes of a layout dump.
#[derive(Deserialize)]
#[serde(untagged)]
enum LayoutDump {
    Document { pages: Vec<LayoutPage> },
    Pages(Vec<LayoutPage>),
}

impl From<LayoutDump> for LayoutDocument {
    fn from(dump: LayoutDump) -> Self {
        let pages = match dump {
            LayoutDump::Document { pages } => pages,
            LayoutDump::Pages(pages) => pages,
        };
        LayoutDocument::from_pages(pages)
    }
}

impl LayoutDocument {
    /// Load a layout dump from a file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        log::debug!("Reading layout from {}", path.display());
        Self::from_reader(BufReader::new(file))
    }

    /// Load a layout dump from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let dump: LayoutDump =
            serde_json::from_reader(reader).map_err(|e| Error::Layout(e.to_string()))?;
        Ok(dump.into())
    }

    /// Load a layout dump from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let dump: LayoutDump =
            serde_json::from_slice(data).map_err(|e| Error::Layout(e.to_string()))?;
        Ok(dump.into())
    }

    /// Load a layout dump from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_bytes(json.as_bytes())
    }
}
