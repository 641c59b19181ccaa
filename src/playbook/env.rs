//! Environment mapping consulted by the playbook builder.
//!
//! A handful of variables override playbook fields (useful on CI, where the
//! production URL or output directory differ from the checked-in playbook).
//! Unrecognized variables are carried unchanged so later stages can read
//! them.

use std::collections::BTreeMap;

/// Variable overriding `[site.url]`.
pub const URL_VAR: &str = "URL";
/// Variable overriding `[site.title]`.
pub const SITE_TITLE_VAR: &str = "SITE_TITLE";
/// Variable overriding `[output.dir]`.
pub const OUTPUT_DIR_VAR: &str = "OUTPUT_DIR";

/// An immutable snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the process environment.
    ///
    /// Variables with non-UTF-8 names or values are skipped.
    pub fn from_os() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| {
                Some((key.into_string().ok()?, value.into_string().ok()?))
            })
            .collect()
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Set a variable, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Builder-style `set` for test and embedding convenience.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Iterate variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl FromIterator<(String, String)> for Environment {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}
