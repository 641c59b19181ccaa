//! Markup configuration resolution.
//!
//! The markup configuration governs document conversion: a flat mapping of
//! attribute names to values, assembled once from the playbook and read-only
//! afterwards. Intrinsic attributes identify the generator and carry site
//! metadata; the playbook's `[markup]` attributes overlay them.
//!
//! One attribute is special: `site-component` selects the pipeline variant
//! (see [`SiteComponent`]).

use crate::playbook::{AttributeValue, Playbook};
use std::collections::BTreeMap;

/// Attribute naming the site component.
pub const SITE_COMPONENT_ATTR: &str = "site-component";

/// Discriminator value that enables the live graph-gist pipeline extension.
pub const GRAPH_GISTS_COMPONENT: &str = "graphgists";

// ============================================================================
// Resolution
// ============================================================================

/// Resolved markup configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkupConfig {
    /// Attribute name to value, intrinsics overlaid with playbook values.
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl MarkupConfig {
    /// Value of the `site-component` attribute.
    ///
    /// Returns the empty string when the attribute is absent or not a
    /// string; a missing discriminator is not an error.
    pub fn site_component(&self) -> &str {
        self.attributes
            .get(SITE_COMPONENT_ATTR)
            .and_then(AttributeValue::as_str)
            .unwrap_or("")
    }
}

/// Derive the markup configuration from the playbook.
///
/// Infallible: every playbook resolves to a markup configuration.
pub fn resolve_markup_config(playbook: &Playbook) -> MarkupConfig {
    let mut attributes: BTreeMap<String, AttributeValue> = BTreeMap::new();

    // Intrinsic attributes every converted document sees
    attributes.insert("env".into(), "site".into());
    attributes.insert("env-site".into(), "".into());
    attributes.insert("site-gen".into(), "sitewright".into());
    attributes.insert("site-title".into(), playbook.site.title.as_str().into());
    if let Some(url) = &playbook.site.url {
        attributes.insert("site-url".into(), url.as_str().into());
    }

    // Playbook attributes win over intrinsics
    attributes.extend(
        playbook
            .markup
            .attributes
            .iter()
            .map(|(name, value)| (name.clone(), value.clone())),
    );

    MarkupConfig { attributes }
}

// ============================================================================
// Site Component
// ============================================================================

/// Pipeline variant selected by the `site-component` attribute.
///
/// Each variant carries its own pipeline extension: `GraphGists` fetches
/// live gist content and runs the gist augmentation steps, `Standard` runs
/// none. The step list itself is declared next to the step enum in the
/// plugins module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteComponent {
    /// No pipeline extension.
    Standard,
    /// Live graph-gist import plus its ordered augmentation steps.
    GraphGists,
}

impl SiteComponent {
    /// Classify the discriminator value of a resolved markup config.
    pub fn from_markup(markup: &MarkupConfig) -> Self {
        match markup.site_component() {
            GRAPH_GISTS_COMPONENT => Self::GraphGists,
            _ => Self::Standard,
        }
    }

    /// Whether the pipeline fetches and merges live gist content.
    pub const fn includes_live_content(self) -> bool {
        matches!(self, Self::GraphGists)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn make_playbook(extra: &str) -> Playbook {
        Playbook::from_str(&format!(
            r#"
            [site]
            title = "Docs"
            {extra}
        "#
        ))
        .unwrap()
    }

    // ------------------------------------------------------------------------
    // resolve_markup_config tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_resolve_sets_intrinsic_attributes() {
        let markup = resolve_markup_config(&make_playbook(""));

        assert_eq!(
            markup.attributes.get("env"),
            Some(&AttributeValue::Str("site".into()))
        );
        assert_eq!(
            markup.attributes.get("site-gen"),
            Some(&AttributeValue::Str("sitewright".into()))
        );
        assert_eq!(
            markup.attributes.get("site-title"),
            Some(&AttributeValue::Str("Docs".into()))
        );
    }

    #[test]
    fn test_resolve_site_url_only_when_set() {
        let without = resolve_markup_config(&make_playbook(""));
        assert_eq!(without.attributes.get("site-url"), None);

        let with = resolve_markup_config(&make_playbook(r#"url = "https://docs.example.com""#));
        assert_eq!(
            with.attributes.get("site-url"),
            Some(&AttributeValue::Str("https://docs.example.com".into()))
        );
    }

    #[test]
    fn test_resolve_playbook_attributes_override_intrinsics() {
        let playbook = make_playbook(
            r#"
            [markup.attributes]
            site-gen = "custom"
            icons = "font"
        "#,
        );
        let markup = resolve_markup_config(&playbook);

        assert_eq!(
            markup.attributes.get("site-gen"),
            Some(&AttributeValue::Str("custom".into()))
        );
        assert_eq!(
            markup.attributes.get("icons"),
            Some(&AttributeValue::Str("font".into()))
        );
    }

    // ------------------------------------------------------------------------
    // site_component tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_site_component_defaults_to_empty() {
        let markup = resolve_markup_config(&make_playbook(""));
        assert_eq!(markup.site_component(), "");
    }

    #[test]
    fn test_site_component_reads_string_value() {
        let playbook = make_playbook(
            r#"
            [markup.attributes]
            site-component = "manual"
        "#,
        );
        let markup = resolve_markup_config(&playbook);

        assert_eq!(markup.site_component(), "manual");
    }

    #[test]
    fn test_site_component_boolean_value_is_empty() {
        let playbook = make_playbook(
            r#"
            [markup.attributes]
            site-component = true
        "#,
        );
        let markup = resolve_markup_config(&playbook);

        assert_eq!(markup.site_component(), "");
    }

    // ------------------------------------------------------------------------
    // SiteComponent tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_from_markup_graphgists() {
        let playbook = make_playbook(
            r#"
            [markup.attributes]
            site-component = "graphgists"
        "#,
        );
        let markup = resolve_markup_config(&playbook);

        assert_eq!(SiteComponent::from_markup(&markup), SiteComponent::GraphGists);
        assert!(SiteComponent::from_markup(&markup).includes_live_content());
    }

    #[test]
    fn test_from_markup_other_values_are_standard() {
        for extra in [
            "",
            "[markup.attributes]\nsite-component = \"manual\"",
            "[markup.attributes]\nsite-component = \"GraphGists\"",
        ] {
            let markup = resolve_markup_config(&make_playbook(extra));
            let component = SiteComponent::from_markup(&markup);

            assert_eq!(component, SiteComponent::Standard);
            assert!(!component.includes_live_content());
        }
    }
}
