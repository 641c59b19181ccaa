//! Sitewright - a build pipeline orchestrator for multi-source
//! documentation sites.
//!
//! The crate owns the order of a site build and the data handed between its
//! stages. The stages themselves live behind trait seams supplied by the
//! embedding toolchain, so the same pipeline drives different aggregators,
//! converters, and publishers.
//!
//! ```text
//! playbook ──► markup config ──► load (concurrent) ──► convert ──► augment
//!          ──► navigate ──► compose (parallel) ──► assemble ──► publish
//! ```
//!
//! | Module | Role |
//! |--------|------|
//! | [`playbook`] | Playbook file loading, env and CLI overlays, validation |
//! | [`markup`] | Markup attribute resolution and site component selection |
//! | [`model`] | Catalogs, documents, pages, site files, publish reports |
//! | [`stages`] | The [`Toolchain`] and [`PageComposer`] seams |
//! | [`plugins`] | Graph-gist and knowledge-base augmentation seams |
//! | [`pipeline`] | The [`SiteGenerator`] orchestrator |
//! | [`logger`] | Stage-prefixed terminal logging |

pub mod logger;
pub mod markup;
pub mod model;
pub mod pipeline;
pub mod playbook;
pub mod plugins;
pub mod stages;

pub use markup::{MarkupConfig, SiteComponent, resolve_markup_config};
pub use model::PublishReport;
pub use pipeline::SiteGenerator;
pub use playbook::{Environment, Playbook, build_playbook};
pub use plugins::{GistAugmentation, GraphGistPlugin, KnowledgeBasePlugin, KnowledgeBaseStep};
pub use stages::{PageComposer, Toolchain};
