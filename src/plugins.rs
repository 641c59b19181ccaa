//! Content plugin seams.
//!
//! Two plugin families augment the draft site between conversion and
//! navigation: the live graph-gist importer (runs only when the site
//! component opts in) and the knowledge-base feature (runs on every build).
//! Each family is an ordered list of transform steps over the shared draft
//! state; the step enums declare that order as part of the contract, and the
//! provided `apply` methods dispatch a step to its operation.

use crate::markup::{MarkupConfig, SiteComponent};
use crate::model::{ContentCatalog, GraphGistSet, Page};
use anyhow::Result;

// ============================================================================
// Graph gists
// ============================================================================

/// Post-conversion gist augmentation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GistAugmentation {
    /// Generate notebook attachments from gist sources.
    NotebookAttachments,
    /// Inject one category page per distinct gist category.
    CategoryPages,
    /// Assign gist-derived attributes onto catalog entries.
    PageAttributes,
    /// Inject the gist index page.
    IndexPage,
}

impl GistAugmentation {
    /// Fixed execution order. Later steps read mutations made by earlier
    /// ones, so reordering changes the produced site.
    pub const ORDER: [Self; 4] = [
        Self::NotebookAttachments,
        Self::CategoryPages,
        Self::PageAttributes,
        Self::IndexPage,
    ];
}

impl SiteComponent {
    /// The post-conversion augmentation steps this component runs, in order.
    pub fn augmentations(self) -> &'static [GistAugmentation] {
        match self {
            Self::GraphGists => &GistAugmentation::ORDER,
            Self::Standard => &[],
        }
    }
}

/// Live graph-gist importer.
///
/// `fetch_live` runs during the concurrent load phase and `add_gist_pages`
/// runs before document conversion; the remaining operations run after
/// conversion in [`GistAugmentation::ORDER`].
#[allow(async_fn_in_trait)]
pub trait GraphGistPlugin {
    /// Fetch the live gist set. Called at most once per build, and only
    /// when the site component includes live content.
    async fn fetch_live(&self) -> Result<GraphGistSet>;

    /// Inject one source document per gist into the catalog, ahead of
    /// document conversion.
    fn add_gist_pages(
        &self,
        gists: &GraphGistSet,
        catalog: &mut ContentCatalog,
        markup: &MarkupConfig,
    ) -> Result<()>;

    fn generate_notebook_attachments(
        &self,
        gists: &GraphGistSet,
        catalog: &mut ContentCatalog,
    ) -> Result<()>;

    fn add_category_pages(
        &self,
        gists: &GraphGistSet,
        pages: &mut Vec<Page>,
        catalog: &mut ContentCatalog,
        markup: &MarkupConfig,
    ) -> Result<()>;

    fn assign_page_attributes(
        &self,
        gists: &GraphGistSet,
        catalog: &mut ContentCatalog,
        markup: &MarkupConfig,
    ) -> Result<()>;

    fn add_index_page(
        &self,
        gists: &GraphGistSet,
        pages: &mut Vec<Page>,
        catalog: &mut ContentCatalog,
        markup: &MarkupConfig,
    ) -> Result<()>;

    /// Dispatch one ordered augmentation step.
    fn apply(
        &self,
        step: GistAugmentation,
        gists: &GraphGistSet,
        pages: &mut Vec<Page>,
        catalog: &mut ContentCatalog,
        markup: &MarkupConfig,
    ) -> Result<()> {
        match step {
            GistAugmentation::NotebookAttachments => {
                self.generate_notebook_attachments(gists, catalog)
            }
            GistAugmentation::CategoryPages => {
                self.add_category_pages(gists, pages, catalog, markup)
            }
            GistAugmentation::PageAttributes => self.assign_page_attributes(gists, catalog, markup),
            GistAugmentation::IndexPage => self.add_index_page(gists, pages, catalog, markup),
        }
    }
}

// ============================================================================
// Knowledge base
// ============================================================================

/// Knowledge-base augmentation steps, run on every build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnowledgeBaseStep {
    /// Derive a description for each page from its content.
    PageDescriptions,
    /// Inject one category page per knowledge-base category.
    CategoryPages,
    /// Inject one tag page per knowledge-base tag.
    TagPages,
}

impl KnowledgeBaseStep {
    /// Fixed execution order.
    pub const ORDER: [Self; 3] = [Self::PageDescriptions, Self::CategoryPages, Self::TagPages];
}

/// Knowledge-base category and tag feature.
pub trait KnowledgeBasePlugin {
    fn generate_page_descriptions(&self, pages: &mut Vec<Page>) -> Result<()>;

    fn add_category_pages(
        &self,
        pages: &mut Vec<Page>,
        catalog: &mut ContentCatalog,
        markup: &MarkupConfig,
    ) -> Result<()>;

    fn add_tag_pages(
        &self,
        pages: &mut Vec<Page>,
        catalog: &mut ContentCatalog,
        markup: &MarkupConfig,
    ) -> Result<()>;

    /// Dispatch one ordered step.
    fn apply(
        &self,
        step: KnowledgeBaseStep,
        pages: &mut Vec<Page>,
        catalog: &mut ContentCatalog,
        markup: &MarkupConfig,
    ) -> Result<()> {
        match step {
            KnowledgeBaseStep::PageDescriptions => self.generate_page_descriptions(pages),
            KnowledgeBaseStep::CategoryPages => self.add_category_pages(pages, catalog, markup),
            KnowledgeBaseStep::TagPages => self.add_tag_pages(pages, catalog, markup),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // ------------------------------------------------------------------------
    // Step order
    // ------------------------------------------------------------------------

    #[test]
    fn test_gist_augmentation_order() {
        assert_eq!(
            GistAugmentation::ORDER,
            [
                GistAugmentation::NotebookAttachments,
                GistAugmentation::CategoryPages,
                GistAugmentation::PageAttributes,
                GistAugmentation::IndexPage,
            ]
        );
    }

    #[test]
    fn test_knowledge_base_order() {
        assert_eq!(
            KnowledgeBaseStep::ORDER,
            [
                KnowledgeBaseStep::PageDescriptions,
                KnowledgeBaseStep::CategoryPages,
                KnowledgeBaseStep::TagPages,
            ]
        );
    }

    #[test]
    fn test_component_augmentations() {
        assert_eq!(
            SiteComponent::GraphGists.augmentations(),
            &GistAugmentation::ORDER
        );
        assert!(SiteComponent::Standard.augmentations().is_empty());
    }

    // ------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------

    #[derive(Default)]
    struct RecordingGistPlugin {
        calls: Mutex<Vec<&'static str>>,
    }

    impl RecordingGistPlugin {
        fn record(&self, name: &'static str) -> Result<()> {
            self.calls.lock().unwrap().push(name);
            Ok(())
        }
    }

    impl GraphGistPlugin for RecordingGistPlugin {
        async fn fetch_live(&self) -> Result<GraphGistSet> {
            self.record("fetch_live")?;
            Ok(GraphGistSet::default())
        }

        fn add_gist_pages(
            &self,
            _gists: &GraphGistSet,
            _catalog: &mut ContentCatalog,
            _markup: &MarkupConfig,
        ) -> Result<()> {
            self.record("add_gist_pages")
        }

        fn generate_notebook_attachments(
            &self,
            _gists: &GraphGistSet,
            _catalog: &mut ContentCatalog,
        ) -> Result<()> {
            self.record("notebook_attachments")
        }

        fn add_category_pages(
            &self,
            _gists: &GraphGistSet,
            _pages: &mut Vec<Page>,
            _catalog: &mut ContentCatalog,
            _markup: &MarkupConfig,
        ) -> Result<()> {
            self.record("category_pages")
        }

        fn assign_page_attributes(
            &self,
            _gists: &GraphGistSet,
            _catalog: &mut ContentCatalog,
            _markup: &MarkupConfig,
        ) -> Result<()> {
            self.record("page_attributes")
        }

        fn add_index_page(
            &self,
            _gists: &GraphGistSet,
            _pages: &mut Vec<Page>,
            _catalog: &mut ContentCatalog,
            _markup: &MarkupConfig,
        ) -> Result<()> {
            self.record("index_page")
        }
    }

    #[test]
    fn test_gist_apply_dispatches_in_declared_order() {
        let plugin = RecordingGistPlugin::default();
        let gists = GraphGistSet::default();
        let mut pages = Vec::new();
        let mut catalog = ContentCatalog::new();
        let markup = MarkupConfig::default();

        for &step in &GistAugmentation::ORDER {
            plugin
                .apply(step, &gists, &mut pages, &mut catalog, &markup)
                .unwrap();
        }

        assert_eq!(
            *plugin.calls.lock().unwrap(),
            vec![
                "notebook_attachments",
                "category_pages",
                "page_attributes",
                "index_page",
            ]
        );
    }

    #[derive(Default)]
    struct RecordingKbPlugin {
        calls: Mutex<Vec<&'static str>>,
    }

    impl KnowledgeBasePlugin for RecordingKbPlugin {
        fn generate_page_descriptions(&self, _pages: &mut Vec<Page>) -> Result<()> {
            self.calls.lock().unwrap().push("descriptions");
            Ok(())
        }

        fn add_category_pages(
            &self,
            _pages: &mut Vec<Page>,
            _catalog: &mut ContentCatalog,
            _markup: &MarkupConfig,
        ) -> Result<()> {
            self.calls.lock().unwrap().push("category_pages");
            Ok(())
        }

        fn add_tag_pages(
            &self,
            _pages: &mut Vec<Page>,
            _catalog: &mut ContentCatalog,
            _markup: &MarkupConfig,
        ) -> Result<()> {
            self.calls.lock().unwrap().push("tag_pages");
            Ok(())
        }
    }

    #[test]
    fn test_knowledge_base_apply_dispatches_in_declared_order() {
        let plugin = RecordingKbPlugin::default();
        let mut pages = Vec::new();
        let mut catalog = ContentCatalog::new();
        let markup = MarkupConfig::default();

        for &step in &KnowledgeBaseStep::ORDER {
            plugin
                .apply(step, &mut pages, &mut catalog, &markup)
                .unwrap();
        }

        assert_eq!(
            *plugin.calls.lock().unwrap(),
            vec!["descriptions", "category_pages", "tag_pages"]
        );
    }
}
