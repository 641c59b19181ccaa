//! `[site]` section configuration.
//!
//! Contains global site metadata like title, base URL, and start page.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in the playbook - global site metadata.
///
/// # Example
/// ```toml
/// [site]
/// title = "Operations Manual"
/// url = "https://docs.example.com"
/// start_page = "manual::index.adoc"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title displayed by the UI and used in page metadata.
    pub title: String,

    /// Base URL for absolute links.
    /// When set, the published site additionally carries a 404 page.
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: Option<String>,

    /// Page the site root redirects to (e.g. "manual::index.adoc").
    #[serde(default = "defaults::site::start_page")]
    #[educe(Default = defaults::site::start_page())]
    pub start_page: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::super::Playbook;

    #[test]
    fn test_site_config_full() {
        let playbook = r#"
            [site]
            title = "Operations Manual"
            url = "https://docs.example.com"
            start_page = "manual::index.adoc"
        "#;
        let playbook: Playbook = toml::from_str(playbook).unwrap();

        assert_eq!(playbook.site.title, "Operations Manual");
        assert_eq!(
            playbook.site.url,
            Some("https://docs.example.com".to_string())
        );
        assert_eq!(
            playbook.site.start_page,
            Some("manual::index.adoc".to_string())
        );
    }

    #[test]
    fn test_site_config_defaults() {
        let playbook = r#"
            [site]
            title = "Docs"
        "#;
        let playbook: Playbook = toml::from_str(playbook).unwrap();

        assert_eq!(playbook.site.title, "Docs");
        assert_eq!(playbook.site.url, None);
        assert_eq!(playbook.site.start_page, None);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let playbook = r#"
            [site]
            title = "Docs"
            unknown_field = "should_fail"
        "#;
        let result: Result<Playbook, _> = toml::from_str(playbook);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_site_config_url_with_path() {
        let playbook = r#"
            [site]
            title = "Docs"
            url = "https://example.com/docs"
        "#;
        let playbook: Playbook = toml::from_str(playbook).unwrap();

        assert_eq!(
            playbook.site.url,
            Some("https://example.com/docs".to_string())
        );
    }
}
