//! Logging utilities with colored stage prefixes.
//!
//! This module provides the `log!` macro for formatted terminal output.
//! Each pipeline stage logs under its own prefix, so a full run reads as
//! a narrated sequence:
//!
//! ```text
//! [playbook] loaded site.toml (2 content sources)
//! [content] classified 118 documents
//! [ui] loaded 34 assets
//! [compose] composed 96 pages
//! [publish] wrote 101 files to build/site
//! ```
//!
//! # Example
//!
//! ```ignore
//! log!("content"; "classified {} documents", catalog.len());
//! ```

use colored::{ColoredString, Colorize};
use crossterm::terminal::size;
use std::{
    io::{Write, stdout},
    sync::OnceLock,
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

// ============================================================================
// Layout Constants
// ============================================================================
//
// Log line format: "[stage] message"
//                   ^-----^ ^-----^
//                   prefix  message (truncated to terminal width)

/// Length of brackets around stage name: "[]"
const BRACKET_LEN: usize = 2;
/// Space after prefix: "[stage] " <- this space
const SPACE_AFTER_PREFIX: usize = 1;

/// Calculate total prefix length for a stage name.
///
/// Returns: `stage.len() + 3` (for `[`, `]`, and trailing space)
#[inline]
const fn calc_prefix_len(stage_len: usize) -> usize {
    stage_len + BRACKET_LEN + SPACE_AFTER_PREFIX
}

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails.
fn get_terminal_width() -> u16 {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120))
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored stage prefix.
///
/// # Usage
/// ```ignore
/// log!("stage"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($stage:expr; $($arg:tt)*) => {{
        $crate::logger::log($stage, &format!($($arg)*))
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored stage prefix.
///
/// Automatically truncates long single-line messages to fit terminal width.
#[inline]
pub fn log(stage: &str, message: &str) {
    let stage_lower = stage.to_ascii_lowercase();
    let prefix = colorize_prefix(stage, &stage_lower);
    let width = get_terminal_width() as usize;

    let mut stdout = stdout().lock();

    // Check for multiline
    if message.contains('\n') {
        // For multiline, we print the prefix with the first line,
        // and then the rest of the lines. We don't truncate.
        writeln!(stdout, "{prefix} {message}").ok();
    } else {
        // Truncate message if it exceeds available width
        let prefix_len = calc_prefix_len(stage.len());
        let max_msg_len = width.saturating_sub(prefix_len);

        let message = if message.len() > max_msg_len {
            truncate_str(message, max_msg_len)
        } else {
            message
        };

        writeln!(stdout, "{prefix} {message}").ok();
    }

    stdout.flush().ok();
}

/// Apply color to a stage prefix based on stage name.
#[inline]
fn colorize_prefix(stage: &str, stage_lower: &str) -> ColoredString {
    let prefix = format!("[{stage}]");
    match stage_lower {
        "compose" => prefix.bright_blue().bold(),
        "publish" => prefix.bright_green().bold(),
        "error" => prefix.bright_red().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to fit within `max_len` bytes.
///
/// Ensures the result is valid UTF-8 by finding the nearest character boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    // Find the last valid UTF-8 boundary within max_len
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

// ============================================================================
// Tests
// ============================================================================
