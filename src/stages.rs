//! Toolchain seams for the delegated build stages.
//!
//! The orchestrator owns ordering and data threading only; the semantics of
//! every stage live behind [`Toolchain`]. I/O-bound stages (aggregation, UI
//! loading, publishing) are async so the load phase can overlap them;
//! everything else is synchronous catalog surgery.

use crate::markup::MarkupConfig;
use crate::model::{
    ContentCatalog, FileSource, NavigationCatalog, Page, PublishReport, RawContentAggregate,
    SiteFile, UiCatalog,
};
use crate::playbook::{Environment, Playbook};
use anyhow::Result;

/// The delegated build stages of the site toolchain.
#[allow(async_fn_in_trait)]
pub trait Toolchain {
    /// Gather raw files from every content source in the playbook.
    async fn aggregate_content(&self, playbook: &Playbook) -> Result<RawContentAggregate>;

    /// Classify aggregated files into the content catalog.
    fn classify_content(
        &self,
        playbook: &Playbook,
        aggregate: RawContentAggregate,
        markup: &MarkupConfig,
    ) -> Result<ContentCatalog>;

    /// Load the UI bundle into the UI catalog.
    async fn load_ui(&self, playbook: &Playbook) -> Result<UiCatalog>;

    /// Convert catalog documents into pages, in place for the catalog and
    /// returning the page collection. Converted pages come back with their
    /// output identity assigned.
    fn convert_documents(
        &self,
        catalog: &mut ContentCatalog,
        markup: &MarkupConfig,
    ) -> Result<Vec<Page>>;

    /// Build the navigation catalog from the content catalog.
    fn build_navigation(
        &self,
        catalog: &ContentCatalog,
        markup: &MarkupConfig,
    ) -> Result<NavigationCatalog>;

    /// Attach navigation-derived slugs onto catalog entries.
    fn attach_nav_slugs(
        &self,
        catalog: &mut ContentCatalog,
        navigation: &NavigationCatalog,
    ) -> Result<()>;

    /// Create the page composer bound to this build's playbook, catalogs,
    /// and environment.
    fn page_composer<'a>(
        &'a self,
        playbook: &'a Playbook,
        catalog: &'a ContentCatalog,
        ui_catalog: &'a UiCatalog,
        env: &'a Environment,
    ) -> Result<Box<dyn PageComposer + Sync + 'a>>;

    /// Map composed pages to the site files they publish as.
    fn map_site(&self, playbook: &Playbook, pages: &[Page]) -> Result<Vec<SiteFile>>;

    /// Produce redirect files from catalog aliases.
    fn produce_redirects(
        &self,
        playbook: &Playbook,
        catalog: &ContentCatalog,
    ) -> Result<Vec<SiteFile>>;

    /// Publish all catalogs' files to the configured destination.
    async fn publish(
        &self,
        playbook: &Playbook,
        catalogs: &[&dyn FileSource],
    ) -> Result<PublishReport>;
}

/// Renders one page's final body and attaches it in place.
///
/// A composer only exists once the content and navigation catalogs are
/// read-only, and composing distinct pages touches disjoint state, so
/// implementations must be `Sync` to allow a parallel composition loop.
pub trait PageComposer {
    fn compose(
        &self,
        page: &mut Page,
        catalog: &ContentCatalog,
        navigation: &NavigationCatalog,
    ) -> Result<()>;
}
