//! Default values for playbook fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn url() -> Option<String> {
        None
    }

    pub fn start_page() -> Option<String> {
        None
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    pub fn branches() -> Vec<String> {
        vec!["HEAD".into()]
    }

    pub fn start_path() -> String {
        String::new()
    }
}

// ============================================================================
// [ui] Section Defaults
// ============================================================================

pub mod ui {
    pub fn output_dir() -> String {
        "_".into()
    }

    pub fn default_layout() -> Option<String> {
        None
    }
}

// ============================================================================
// [output] Section Defaults
// ============================================================================

pub mod output {
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        "build/site".into()
    }
}
