//! core::types
//!
//! Shared types for label and annotation handling.
//!
//! # Types
//!
//! - [`MetadataMap`] - String key/value map stored in a metadata slot
//! - [`MetadataSlot`] - Selects the labels or annotations slot of an object
//! - [`KeyMatch`] - How a lookup key is compared against stored keys
//!
//! # Examples
//!
//! ```
//! use objmeta::core::types::{KeyMatch, MetadataSlot};
//!
//! assert!(KeyMatch::Prefix.matches("app/name", "app/"));
//! assert!(!KeyMatch::Exact.matches("app/name", "app/"));
//! assert_eq!(MetadataSlot::Labels.to_string(), "labels");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A map of metadata keys to values.
///
/// Iteration order is sorted by key, which keeps serialized output stable.
/// Callers should not rely on ordering for anything else.
pub type MetadataMap = BTreeMap<String, String>;

/// One of the two metadata slots carried by an object.
///
/// Every operation in [`crate::core::metadata`] is written once against a
/// slot and exposed twice, once per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataSlot {
    /// Identifying key/value pairs used for selection.
    Labels,
    /// Non-identifying key/value pairs.
    Annotations,
}

impl MetadataSlot {
    /// Returns the slot name as used in configuration and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetadataSlot::Labels => "labels",
            MetadataSlot::Annotations => "annotations",
        }
    }
}

impl fmt::Display for MetadataSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a lookup key is compared against stored keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyMatch {
    /// Stored key must equal the lookup key.
    Exact,
    /// Stored key must start with the lookup key.
    Prefix,
}

impl KeyMatch {
    /// Check whether `key` matches `pattern` under this mode.
    pub fn matches(&self, key: &str, pattern: &str) -> bool {
        match self {
            KeyMatch::Exact => key == pattern,
            KeyMatch::Prefix => key.starts_with(pattern),
        }
    }
}
