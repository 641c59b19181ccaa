//! Site generation orchestration.
//!
//! Coordinates the full build: load, convert, augment, compose, publish.
//! Stage semantics live behind the [`Toolchain`] and plugin seams; this
//! module owns only their ordering and the data handed between them.
//!
//! # Architecture
//!
//! ```text
//! generate()
//!     │
//!     ├── build_playbook() ──► resolve_markup_config() ──► SiteComponent
//!     │
//!     ├── try_join! ─┬─ aggregate_content() ──► classify_content()
//!     │              ├─ load_ui()
//!     │              └─ fetch_live()           (graph-gist sites only)
//!     │
//!     ├── add_gist_pages()                     (graph-gist sites only)
//!     ├── convert_documents()
//!     ├── GistAugmentation::ORDER              (graph-gist sites only)
//!     ├── KnowledgeBaseStep::ORDER
//!     ├── build_navigation() ──► attach_nav_slugs()
//!     ├── compose pages                        (parallel)
//!     ├── map_site() + produce_redirects() + 404 page
//!     └── publish()
//! ```

use crate::log;
use crate::markup::{SiteComponent, resolve_markup_config};
use crate::model::{GraphGistSet, Page, PublishReport, SiteCatalog};
use crate::playbook::{Environment, build_playbook};
use crate::plugins::{GraphGistPlugin, KnowledgeBasePlugin, KnowledgeBaseStep};
use crate::stages::Toolchain;
use anyhow::Result;
use rayon::prelude::*;

/// Runs the generation pipeline over a toolchain and its plugins.
pub struct SiteGenerator<T, G, K> {
    toolchain: T,
    gists: G,
    knowledge_base: K,
}

impl<T, G, K> SiteGenerator<T, G, K>
where
    T: Toolchain,
    G: GraphGistPlugin,
    K: KnowledgeBasePlugin,
{
    pub fn new(toolchain: T, gists: G, knowledge_base: K) -> Self {
        Self {
            toolchain,
            gists,
            knowledge_base,
        }
    }

    /// Generate and publish the site described by the given arguments and
    /// environment.
    ///
    /// Stages run in a fixed order; augmentation steps consume mutations
    /// made by the steps before them, so the order is part of the contract.
    pub async fn generate(
        &self,
        raw_args: &[String],
        env: &Environment,
    ) -> Result<PublishReport> {
        let playbook = build_playbook(raw_args, env)?;
        let markup = resolve_markup_config(&playbook);
        let component = SiteComponent::from_markup(&markup);
        log!("playbook"; "loaded {}", playbook.file.display());

        // ====================================================================
        // Load
        // ====================================================================
        // Content aggregation, UI loading, and the live gist fetch are
        // independent, so they run concurrently. The first failure wins and
        // the remaining loads are dropped at the join.
        let (mut catalog, ui_catalog, gists) = tokio::try_join!(
            async {
                let aggregate = self.toolchain.aggregate_content(&playbook).await?;
                self.toolchain.classify_content(&playbook, aggregate, &markup)
            },
            self.toolchain.load_ui(&playbook),
            async {
                if component.includes_live_content() {
                    self.gists.fetch_live().await
                } else {
                    Ok(GraphGistSet::default())
                }
            },
        )?;
        log!("load"; "{} documents, {} ui assets", catalog.len(), ui_catalog.len());

        // ====================================================================
        // Convert and augment
        // ====================================================================
        // Gist source pages must exist before conversion so they are
        // converted alongside regular content.
        if component.includes_live_content() {
            log!("gists"; "{} live entries", gists.len());
            self.gists.add_gist_pages(&gists, &mut catalog, &markup)?;
        }

        let mut pages = self.toolchain.convert_documents(&mut catalog, &markup)?;
        log!("convert"; "{} pages", pages.len());

        for &step in component.augmentations() {
            self.gists
                .apply(step, &gists, &mut pages, &mut catalog, &markup)?;
        }

        for &step in &KnowledgeBaseStep::ORDER {
            self.knowledge_base
                .apply(step, &mut pages, &mut catalog, &markup)?;
        }

        // ====================================================================
        // Navigate and compose
        // ====================================================================
        // Navigation sees the fully augmented catalog; slugs land on the
        // catalog before any page is composed against it.
        let navigation = self.toolchain.build_navigation(&catalog, &markup)?;
        self.toolchain.attach_nav_slugs(&mut catalog, &navigation)?;

        let composer = self
            .toolchain
            .page_composer(&playbook, &catalog, &ui_catalog, env)?;
        log!("compose"; "{} pages", pages.len());
        pages
            .par_iter_mut()
            .try_for_each(|page| composer.compose(page, &catalog, &navigation))?;

        // ====================================================================
        // Assemble and publish
        // ====================================================================
        let mut site_files = self.toolchain.map_site(&playbook, &pages)?;
        site_files.extend(self.toolchain.produce_redirects(&playbook, &catalog)?);

        // A 404 page is published only for sites with a canonical url
        if playbook.site.url.is_some() {
            let mut not_found = Page::not_found();
            composer.compose(&mut not_found, &catalog, &navigation)?;
            site_files.push(not_found.into_site_file()?);
        }

        let site_catalog = SiteCatalog::new(site_files);
        log!("publish"; "{} site files", site_catalog.len());
        let report = self
            .toolchain
            .publish(&playbook, &[&catalog, &ui_catalog, &site_catalog])
            .await?;
        log!("publish"; "{} files published", report.total_files());

        Ok(report)
    }
}
