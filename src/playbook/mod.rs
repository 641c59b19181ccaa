//! Playbook management for the site build.
//!
//! The playbook is the resolved build configuration: it names the content
//! sources, the UI bundle, the output destination, and the site metadata.
//! It is built once at pipeline start and read-only afterwards.
//!
//! # Sections
//!
//! | Section     | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `[site]`    | Site metadata (title, url, start page)       |
//! | `[content]` | Content sources to aggregate                 |
//! | `[ui]`      | UI bundle location and output mapping        |
//! | `[output]`  | Output directory and clean flag              |
//! | `[markup]`  | Default document attributes                  |
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Operations Manual"
//! url = "https://docs.example.com"
//!
//! [[content.sources]]
//! url = "https://github.com/example/manual.git"
//! branches = ["main", "v2.*"]
//!
//! [ui.bundle]
//! url = "https://example.com/ui-bundle.zip"
//!
//! [markup.attributes]
//! site-component = "manual"
//! ```
//!
//! # Precedence
//!
//! Values are layered: playbook file, then recognized environment
//! variables, then arguments. Later layers win.

mod args;
mod content;
pub mod defaults;
mod env;
mod error;
mod markup;
mod output;
mod site;
mod ui;

// Re-export public types used by other modules
pub use args::PlaybookArgs;
pub use content::{ContentConfig, ContentSource};
pub use env::{Environment, OUTPUT_DIR_VAR, SITE_TITLE_VAR, URL_VAR};
pub use error::PlaybookError;
pub use markup::{AttributeValue, MarkupDefaults};
pub use output::OutputConfig;
pub use site::SiteConfig;
pub use ui::{UiBundle, UiConfig};

use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Playbook Builder
// ============================================================================

/// Build the resolved playbook from CLI-style arguments and an environment
/// snapshot.
///
/// Loads the playbook file named by the arguments, overlays recognized
/// environment variables, overlays argument flags, normalizes filesystem
/// paths, and validates the result.
pub fn build_playbook(raw_args: &[String], env: &Environment) -> Result<Playbook> {
    let parsed = PlaybookArgs::parse_from_slice(raw_args).map_err(PlaybookError::Args)?;
    let mut playbook = Playbook::from_path(&parsed.playbook)?;
    playbook.update_with_env(env);
    playbook.update_with_args(&parsed);
    playbook.normalize_paths();
    playbook.validate()?;
    Ok(playbook)
}

// ============================================================================
// Root Playbook
// ============================================================================

/// Root playbook structure describing one site build
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct Playbook {
    /// Absolute path to the playbook file (set after loading)
    #[serde(skip)]
    pub file: PathBuf,

    /// Global site metadata
    #[serde(default)]
    pub site: SiteConfig,

    /// Content sources to aggregate
    #[serde(default)]
    pub content: ContentConfig,

    /// UI bundle settings
    #[serde(default)]
    pub ui: UiConfig,

    /// Output destination
    #[serde(default)]
    pub output: OutputConfig,

    /// Default document attributes
    #[serde(default)]
    pub markup: MarkupDefaults,
}

impl Playbook {
    /// Parse a playbook from a TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let playbook: Playbook = toml::from_str(content).map_err(PlaybookError::Toml)?;
        Ok(playbook)
    }

    /// Load a playbook from a file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| PlaybookError::Io(path.to_path_buf(), err))?;
        let mut playbook = Self::from_str(&content)?;
        playbook.file = path.to_path_buf();
        Ok(playbook)
    }

    /// Overlay recognized environment variables onto the playbook
    pub fn update_with_env(&mut self, env: &Environment) {
        if let Some(url) = env.get(URL_VAR) {
            self.site.url = Some(url.to_string());
        }
        if let Some(title) = env.get(SITE_TITLE_VAR) {
            self.site.title = title.to_string();
        }
        if let Some(dir) = env.get(OUTPUT_DIR_VAR) {
            self.output.dir = PathBuf::from(dir);
        }
    }

    /// Overlay argument flags onto the playbook
    pub fn update_with_args(&mut self, parsed: &PlaybookArgs) {
        Self::update_option(&mut self.output.dir, parsed.to_dir.as_ref());
        Self::update_option(&mut self.output.clean, parsed.clean.as_ref());

        if let Some(url) = &parsed.url {
            self.site.url = Some(url.clone());
        }
        if let Some(title) = &parsed.title {
            self.site.title = title.clone();
        }
        if let Some(bundle_url) = &parsed.ui_bundle_url {
            self.ui.bundle.url = bundle_url.clone();
        }
        for spec in &parsed.attributes {
            let (name, value) = args::parse_attribute(spec);
            self.markup.attributes.insert(name, value);
        }
    }

    /// Update a playbook field if the argument value is provided
    fn update_option<T: Clone>(field: &mut T, arg: Option<&T>) {
        if let Some(value) = arg {
            *field = value.clone();
        }
    }

    /// Expand and absolutize filesystem paths in the playbook
    pub fn normalize_paths(&mut self) {
        let dir = shellexpand::tilde(&self.output.dir.to_string_lossy()).into_owned();
        self.output.dir = Self::normalize_path(Path::new(&dir));
        self.file = Self::normalize_path(&self.file);
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate the resolved playbook
    pub fn validate(&self) -> Result<()> {
        if self.site.title.trim().is_empty() {
            bail!("[site.title] must not be empty");
        }

        if let Some(url) = &self.site.url
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            bail!(PlaybookError::Validation(
                "[site.url] must start with http:// or https://".into()
            ));
        }

        if self.content.sources.is_empty() {
            bail!("[content.sources] must have at least one entry");
        }

        for (index, source) in self.content.sources.iter().enumerate() {
            if source.url.trim().is_empty() {
                bail!(PlaybookError::Validation(format!(
                    "[content.sources] entry {index} is missing a url"
                )));
            }
            if source.branches.is_empty() {
                bail!(PlaybookError::Validation(format!(
                    "[content.sources] entry {index} must name at least one branch"
                )));
            }
        }

        if self.ui.bundle.url.trim().is_empty() {
            bail!("[ui.bundle.url] is required");
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
