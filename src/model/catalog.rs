//! Content aggregation results and catalog collections.
//!
//! Aggregation gathers [`RawFile`]s per origin into a
//! [`RawContentAggregate`]; classification turns that into the
//! [`ContentCatalog`], the one collection every later stage reads or
//! mutates. UI loading fills a [`UiCatalog`] that stays read-only for the
//! rest of the run.

use super::document::{Document, DocumentId, Family};
use super::site::{FileSource, SiteFile};
use std::collections::BTreeMap;

// ============================================================================
// Aggregation
// ============================================================================

/// Raw files gathered from all content sources before classification.
#[derive(Debug, Clone, Default)]
pub struct RawContentAggregate {
    /// One entry per (source, branch) pair, in aggregation order.
    pub origins: Vec<ContentOrigin>,
}

impl RawContentAggregate {
    pub fn file_count(&self) -> usize {
        self.origins.iter().map(|origin| origin.files.len()).sum()
    }
}

/// Files collected from a single source origin.
#[derive(Debug, Clone)]
pub struct ContentOrigin {
    /// Source URL or path the files came from.
    pub url: String,
    /// Branch the files were read from.
    pub branch: String,
    /// Files relative to the origin's content root.
    pub files: Vec<RawFile>,
}

/// One raw file prior to classification.
#[derive(Debug, Clone)]
pub struct RawFile {
    /// Path relative to the origin's content root.
    pub path: String,
    pub contents: Vec<u8>,
}

// ============================================================================
// Content Catalog
// ============================================================================

/// The mutable collection of all classified documents.
///
/// Keyed by document identity; iteration is in id order, so every stage
/// that walks the catalog sees a deterministic sequence.
#[derive(Debug, Clone, Default)]
pub struct ContentCatalog {
    documents: BTreeMap<DocumentId, Document>,
}

impl ContentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document, replacing any previous entry with the same id.
    pub fn insert(&mut self, document: Document) -> Option<Document> {
        self.documents.insert(document.id.clone(), document)
    }

    pub fn get(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.get(id)
    }

    pub fn get_mut(&mut self, id: &DocumentId) -> Option<&mut Document> {
        self.documents.get_mut(id)
    }

    pub fn contains(&self, id: &DocumentId) -> bool {
        self.documents.contains_key(id)
    }

    /// All documents in id order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.values()
    }

    /// Mutable view of all documents in id order.
    pub fn documents_mut(&mut self) -> impl Iterator<Item = &mut Document> {
        self.documents.values_mut()
    }

    /// Documents of one family, in id order.
    pub fn by_family(&self, family: Family) -> impl Iterator<Item = &Document> {
        self.documents
            .values()
            .filter(move |doc| doc.id.family == family)
    }

    /// Page documents, in id order.
    pub fn pages(&self) -> impl Iterator<Item = &Document> {
        self.by_family(Family::Page)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FileSource for ContentCatalog {
    /// Directly-published documents (images, attachments) as site files.
    fn files(&self) -> Vec<SiteFile> {
        self.documents
            .values()
            .filter_map(|doc| {
                let out_path = doc.out_path.clone()?;
                Some(SiteFile {
                    out_path,
                    contents: doc.contents.clone(),
                })
            })
            .collect()
    }
}

// ============================================================================
// UI Catalog
// ============================================================================

/// Role a UI asset plays during composition and publishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAssetKind {
    /// Page layout template.
    Layout,
    /// Reusable template fragment.
    Partial,
    /// Template helper.
    Helper,
    /// Static file copied into the published site.
    Static,
}

/// One file from the UI bundle.
#[derive(Debug, Clone)]
pub struct UiAsset {
    pub kind: UiAssetKind,
    /// Path within the bundle.
    pub path: String,
    pub contents: Vec<u8>,
    /// Publish destination. Only static assets carry one.
    pub out_path: Option<String>,
}

/// Collection of UI bundle assets, read-only after loading.
#[derive(Debug, Clone, Default)]
pub struct UiCatalog {
    assets: Vec<UiAsset>,
}

impl UiCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, asset: UiAsset) {
        self.assets.push(asset);
    }

    pub fn assets(&self) -> &[UiAsset] {
        &self.assets
    }

    /// Assets of one kind, in bundle order.
    pub fn by_kind(&self, kind: UiAssetKind) -> impl Iterator<Item = &UiAsset> {
        self.assets.iter().filter(move |asset| asset.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl FileSource for UiCatalog {
    /// Static assets destined for the published site.
    fn files(&self) -> Vec<SiteFile> {
        self.assets
            .iter()
            .filter_map(|asset| {
                let out_path = asset.out_path.clone()?;
                Some(SiteFile {
                    out_path,
                    contents: asset.contents.clone(),
                })
            })
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
