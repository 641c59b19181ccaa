//! Final site files and publishable catalogs.

use std::path::PathBuf;

/// A final output artifact: a path plus contents, ready for publishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFile {
    /// Path relative to the site root (e.g. "manual/install/index.html").
    pub out_path: String,
    pub contents: Vec<u8>,
}

/// Read access to the publishable files of a catalog.
///
/// The publisher consumes catalogs solely through this trait.
pub trait FileSource {
    /// Publishable files, in deterministic order.
    fn files(&self) -> Vec<SiteFile>;
}

/// Synthetic catalog wrapping the computed site files.
///
/// Holds the mapped pages, the redirects, and the optional not-found page.
#[derive(Debug, Clone, Default)]
pub struct SiteCatalog {
    files: Vec<SiteFile>,
}

impl SiteCatalog {
    pub fn new(files: Vec<SiteFile>) -> Self {
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileSource for SiteCatalog {
    fn files(&self) -> Vec<SiteFile> {
        self.files.clone()
    }
}

/// What the publisher reports after writing the site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// One entry per destination written.
    pub destinations: Vec<PublishedDestination>,
}

/// One destination the publisher wrote to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedDestination {
    /// Provider name (e.g. "fs", "archive").
    pub provider: String,
    /// Destination path.
    pub path: PathBuf,
    /// Number of files written.
    pub file_count: usize,
}

impl PublishReport {
    /// Files written across all destinations.
    pub fn total_files(&self) -> usize {
        self.destinations.iter().map(|dest| dest.file_count).sum()
    }
}
