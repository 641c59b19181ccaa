//! Output page units.
//!
//! Pages are created by document conversion and by augmentation stages
//! (category, tag, and index pages), decorated in place by composition, and
//! finally mapped into site files. A page must have its output identity
//! assigned before it is composed.

use super::site::SiteFile;
use anyhow::{Result, anyhow};
use std::collections::BTreeMap;

/// Title of the synthetic not-found page.
const NOT_FOUND_TITLE: &str = "Page Not Found";
/// Media type of composed pages.
const HTML_MEDIA_TYPE: &str = "text/html";
/// Output path of the synthetic not-found page.
const NOT_FOUND_OUT_PATH: &str = "404.html";
/// Public URL of the synthetic not-found page.
const NOT_FOUND_URL: &str = "/404.html";

/// Source coordinates of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSource {
    /// Filename stem of the source document (e.g. "install").
    pub stem: String,
    /// Component the page came from.
    pub component: String,
    /// Module within the component.
    pub module: String,
}

/// Output location of a page within the published tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLocation {
    /// Path relative to the site root (e.g. "manual/install/index.html").
    pub path: String,
}

/// Publish metadata of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishInfo {
    /// Public URL of the page (e.g. "/manual/install/").
    pub url: String,
    /// Relative path from the page back to the site root.
    pub root_path: String,
}

/// A unit of output content.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Page title shown by the UI.
    pub title: String,

    /// Media type of the composed output.
    pub media_type: String,

    /// Source coordinates.
    pub source: PageSource,

    /// Output identity. Must be assigned before composition.
    pub out: Option<OutputLocation>,

    /// Publish metadata. Absent for pages that are consumed but never
    /// published directly.
    pub publish: Option<PublishInfo>,

    /// Composed output body. Attached by composition.
    pub contents: Option<Vec<u8>>,

    /// Attributes written by conversion and augmentation stages.
    pub attributes: BTreeMap<String, String>,
}

impl Page {
    /// The synthetic not-found page appended when the site has a public URL.
    pub fn not_found() -> Self {
        Self {
            title: NOT_FOUND_TITLE.into(),
            media_type: HTML_MEDIA_TYPE.into(),
            source: PageSource {
                stem: "404".into(),
                ..PageSource::default()
            },
            out: Some(OutputLocation {
                path: NOT_FOUND_OUT_PATH.into(),
            }),
            publish: Some(PublishInfo {
                url: NOT_FOUND_URL.into(),
                root_path: String::new(),
            }),
            contents: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Convert a composed page into its publishable site file.
    pub fn into_site_file(self) -> Result<SiteFile> {
        let out = self
            .out
            .ok_or_else(|| anyhow!("page `{}` has no output path assigned", self.title))?;
        let contents = self
            .contents
            .ok_or_else(|| anyhow!("page `{}` has not been composed", self.title))?;

        Ok(SiteFile {
            out_path: out.path,
            contents,
        })
    }
}
