//! Source document identity and classification.
//!
//! Every file that survives classification becomes a [`Document`] keyed by a
//! [`DocumentId`]. The id orders lexicographically over (component, module,
//! family, relative path), which is what makes catalog iteration
//! deterministic.

use std::{collections::BTreeMap, fmt};

/// Content class a classified file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    /// Publishable page source.
    Page,
    /// Reusable include fragment.
    Partial,
    /// Image referenced by pages.
    Image,
    /// Downloadable attachment.
    Attachment,
    /// Navigation definition file.
    Navigation,
}

impl Family {
    /// Lowercase family name as used in identifiers and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Partial => "partial",
            Self::Image => "image",
            Self::Attachment => "attachment",
            Self::Navigation => "navigation",
        }
    }
}

/// Logical identity of a document within the content catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId {
    /// Component the document belongs to (e.g. "manual").
    pub component: String,
    /// Module within the component ("ROOT" for the default module).
    pub module: String,
    /// Content class.
    pub family: Family,
    /// Path relative to the family root (e.g. "install/index.adoc").
    pub relative: String,
}

impl DocumentId {
    pub fn new(
        component: impl Into<String>,
        module: impl Into<String>,
        family: Family,
        relative: impl Into<String>,
    ) -> Self {
        Self {
            component: component.into(),
            module: module.into(),
            family,
            relative: relative.into(),
        }
    }

    /// Id for a page document, the most common family.
    pub fn page(
        component: impl Into<String>,
        module: impl Into<String>,
        relative: impl Into<String>,
    ) -> Self {
        Self::new(component, module, Family::Page, relative)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}${}",
            self.component,
            self.module,
            self.family.as_str(),
            self.relative
        )
    }
}

/// A classified source document.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,

    /// Title from the document header, when one was found.
    pub title: Option<String>,

    /// Raw source contents.
    pub contents: Vec<u8>,

    /// Publish destination for directly-published families (images,
    /// attachments). Pages publish through the converted page collection
    /// instead and leave this unset.
    pub out_path: Option<String>,

    /// Attributes written by classification and augmentation stages.
    pub attributes: BTreeMap<String, String>,

    /// Navigation slug attached once the navigation catalog exists.
    pub nav_slug: Option<String>,
}

impl Document {
    pub fn new(id: DocumentId, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            id,
            title: None,
            contents: contents.into(),
            out_path: None,
            attributes: BTreeMap::new(),
            nav_slug: None,
        }
    }
}
