//! Live graph-gist content set.
//!
//! Graph gists are externally-hosted interactive content samples. The set
//! is fetched once per build, and only when the site component includes
//! live content; every other build uses the empty set.

use serde::Deserialize;
use std::collections::BTreeSet;

/// Externally-fetched set of live graph gists.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphGistSet {
    #[serde(default)]
    pub gists: Vec<GraphGist>,
}

/// One live graph gist as returned by the gist API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphGist {
    /// URL-safe identifier, unique within the set.
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Raw gist source body.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl GraphGistSet {
    /// Parse a gist set from the JSON payload of the live gist API.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    pub fn len(&self) -> usize {
        self.gists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gists.is_empty()
    }

    /// Distinct categories across all gists, in name order.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.gists
            .iter()
            .flat_map(|gist| gist.categories.iter().map(String::as_str))
            .collect()
    }
}
