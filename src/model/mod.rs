//! Data model shared across pipeline stages.
//!
//! | Module       | Holds                                            |
//! |--------------|--------------------------------------------------|
//! | `document`   | Document identity, families, classified sources  |
//! | `catalog`    | Raw aggregate, content catalog, UI catalog       |
//! | `page`       | Converted pages and the synthetic 404 page       |
//! | `navigation` | Navigation tree                                  |
//! | `gists`      | Live graph-gist set                              |
//! | `site`       | Site files, publishable catalogs, publish report |

pub mod catalog;
pub mod document;
pub mod gists;
pub mod navigation;
pub mod page;
pub mod site;

pub use catalog::{
    ContentCatalog, ContentOrigin, RawContentAggregate, RawFile, UiAsset, UiAssetKind, UiCatalog,
};
pub use document::{Document, DocumentId, Family};
pub use gists::{GraphGist, GraphGistSet};
pub use navigation::{NavEntry, NavMenu, NavigationCatalog};
pub use page::{OutputLocation, Page, PageSource, PublishInfo};
pub use site::{FileSource, PublishReport, PublishedDestination, SiteCatalog, SiteFile};
