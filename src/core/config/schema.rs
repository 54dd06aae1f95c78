//! core::config::schema
//!
//! Propagation config schema types.
//!
//! # Validation
//!
//! Rules are validated after parsing: every rule needs a non-empty prefix,
//! since an empty prefix would copy an entire slot.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::MetadataSlot;

/// Propagation configuration.
///
/// # Example
///
/// ```toml
/// [[rules]]
/// slot = "labels"
/// prefix = "app.example.com/"
/// replacement = "child.example.com/"
///
/// [[rules]]
/// slot = "annotations"
/// prefix = "trace/"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PropagationConfig {
    /// Copy rules, applied in order.
    pub rules: Vec<CopyRule>,
}

impl PropagationConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRule` for the first invalid rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, rule) in self.rules.iter().enumerate() {
            rule.validate()
                .map_err(|message| ConfigError::InvalidRule { index, message })?;
        }
        Ok(())
    }
}

/// A single prefix copy rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CopyRule {
    /// Which slot to copy from and into.
    pub slot: MetadataSlot,

    /// Keys starting with this prefix are copied.
    pub prefix: String,

    /// Replacement for the first occurrence of `prefix` in copied keys.
    /// Keys are copied unchanged when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

impl CopyRule {
    /// Create a rule that copies keys unchanged.
    pub fn new(slot: MetadataSlot, prefix: impl Into<String>) -> Self {
        Self {
            slot,
            prefix: prefix.into(),
            replacement: None,
        }
    }

    /// Rename copied keys by replacing the prefix.
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }

    /// The prefix copied keys end up with.
    pub fn replacement_prefix(&self) -> &str {
        self.replacement.as_deref().unwrap_or(&self.prefix)
    }

    fn validate(&self) -> Result<(), String> {
        if self.prefix.is_empty() {
            return Err(format!("{} prefix cannot be empty", self.slot));
        }
        Ok(())
    }
}
