//! `[content]` section configuration.
//!
//! Lists the content sources whose documents are aggregated into the site.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[content]` section in the playbook - content roots to aggregate.
///
/// # Example
/// ```toml
/// [[content.sources]]
/// url = "https://github.com/example/manual.git"
/// branches = ["main", "v2.*"]
/// start_path = "docs"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Content sources, aggregated in declaration order.
    #[serde(default)]
    pub sources: Vec<ContentSource>,
}

/// A single `[[content.sources]]` entry.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentSource {
    /// Repository URL or local path holding the content root.
    pub url: String,

    /// Branch patterns to aggregate from this source.
    #[serde(default = "defaults::content::branches")]
    #[educe(Default = defaults::content::branches())]
    pub branches: Vec<String>,

    /// Path inside the repository where the content root lives.
    #[serde(default = "defaults::content::start_path")]
    #[educe(Default = defaults::content::start_path())]
    pub start_path: String,

    /// Template for "edit this page" links, if the UI renders them.
    #[serde(default)]
    pub edit_url: Option<String>,
}
