//! `[output]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[output]` section in the playbook - where the site gets written.
///
/// # Example
/// ```toml
/// [output]
/// dir = "~/sites/docs"
/// clean = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Destination directory. Tilde-expanded and made absolute at load.
    #[serde(default = "defaults::output::dir")]
    #[educe(Default = defaults::output::dir())]
    pub dir: PathBuf,

    /// Remove the destination directory before publishing.
    #[serde(default)]
    pub clean: bool,
}
