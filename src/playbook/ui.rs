//! `[ui]` section configuration.
//!
//! Points at the UI bundle and controls where its assets land in the
//! published site.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[ui]` section in the playbook - UI bundle settings.
///
/// # Example
/// ```toml
/// [ui.bundle]
/// url = "https://example.com/ui-bundle.zip"
///
/// [ui]
/// output_dir = "_"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    /// Where the UI bundle comes from.
    #[serde(default)]
    pub bundle: UiBundle,

    /// Directory inside the published site that receives UI assets.
    #[serde(default = "defaults::ui::output_dir")]
    #[educe(Default = defaults::ui::output_dir())]
    pub output_dir: String,

    /// Layout applied to pages that do not name one.
    #[serde(default = "defaults::ui::default_layout")]
    #[educe(Default = defaults::ui::default_layout())]
    pub default_layout: Option<String>,
}

/// `[ui.bundle]` subsection - bundle location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiBundle {
    /// Bundle archive URL or local path.
    pub url: String,

    /// Path inside the bundle where the UI root lives.
    #[serde(default)]
    pub start_path: String,

    /// Treat the bundle as immutable and skip freshness checks.
    #[serde(default)]
    pub snapshot: bool,
}

#[cfg(test)]
mod tests {
    use super::super::Playbook;

    #[test]
    fn test_ui_config_full() {
        let playbook = r#"
            [site]
            title = "Docs"

            [ui]
            output_dir = "_ui"
            default_layout = "article"

            [ui.bundle]
            url = "https://example.com/ui-bundle.zip"
            start_path = "dist"
            snapshot = true
        "#;
        let playbook: Playbook = toml::from_str(playbook).unwrap();

        assert_eq!(playbook.ui.output_dir, "_ui");
        assert_eq!(playbook.ui.default_layout, Some("article".to_string()));
        assert_eq!(playbook.ui.bundle.url, "https://example.com/ui-bundle.zip");
        assert_eq!(playbook.ui.bundle.start_path, "dist");
        assert!(playbook.ui.bundle.snapshot);
    }

    #[test]
    fn test_ui_config_defaults() {
        let playbook = r#"
            [site]
            title = "Docs"

            [ui.bundle]
            url = "./ui-bundle.zip"
        "#;
        let playbook: Playbook = toml::from_str(playbook).unwrap();

        assert_eq!(playbook.ui.output_dir, "_");
        assert_eq!(playbook.ui.default_layout, None);
        assert_eq!(playbook.ui.bundle.start_path, "");
        assert!(!playbook.ui.bundle.snapshot);
    }

    #[test]
    fn test_ui_bundle_unknown_field_rejection() {
        let playbook = r#"
            [site]
            title = "Docs"

            [ui.bundle]
            url = "./ui-bundle.zip"
            mirror = "https://mirror.example.com"
        "#;
        let result: Result<Playbook, _> = toml::from_str(playbook);

        assert!(result.is_err());
    }
}
