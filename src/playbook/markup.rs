//! `[markup]` section configuration.
//!
//! Site-wide default attributes overlaid onto the intrinsic attributes when
//! the markup configuration is resolved.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `[markup]` section in the playbook - default document attributes.
///
/// # Example
/// ```toml
/// [markup.attributes]
/// site-component = "manual"
/// experimental = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkupDefaults {
    /// Attribute name to value, applied to every converted document.
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
}

/// A document attribute value as written in the playbook.
///
/// Attributes are strings or booleans; `true` enables a flag attribute and
/// `false` soft-unsets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Str(String),
}

impl AttributeValue {
    /// String form of the value, or `None` for booleans.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Bool(_) => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
