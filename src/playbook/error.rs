//! Playbook error types.

use std::path::PathBuf;
use thiserror::Error;

/// Playbook-related errors
#[derive(Debug, Error)]
pub enum PlaybookError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Playbook file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid playbook arguments")]
    Args(#[from] clap::Error),

    #[error("Playbook validation error: {0}")]
    Validation(String),
}
