//! core::config
//!
//! Propagation rules: which labels and annotations are copied from a
//! source object onto the objects derived from it.
//!
//! Rules are parsed from and rendered to TOML text. Where that text comes
//! from (a file, a config map, an embedded string) is the caller's concern;
//! this module never touches the filesystem or the environment.
//!
//! # Example
//!
//! ```
//! use objmeta::core::config::PropagationConfig;
//! use objmeta::core::metadata::{add_label, get_label};
//! use objmeta::core::object::ObjectMeta;
//!
//! let config = PropagationConfig::from_toml_str(
//!     r#"
//!     [[rules]]
//!     slot = "labels"
//!     prefix = "app/"
//!     replacement = "parent-app/"
//!     "#,
//! )
//! .unwrap();
//!
//! let mut parent = ObjectMeta::named("web");
//! add_label(Some(&mut parent), "app/name", "web");
//!
//! let mut child = ObjectMeta::named("web-0");
//! config.apply(&parent, &mut child);
//!
//! assert_eq!(get_label(Some(&child), "parent-app/name"), Some("web"));
//! ```

pub mod schema;

pub use schema::{CopyRule, PropagationConfig};

use thiserror::Error;
use tracing::debug;

use crate::core::metadata::ops::copy_by_prefix;
use crate::core::object::MetadataObject;

/// Errors from propagation rule handling.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The TOML text is malformed or does not match the schema.
    #[error("failed to parse propagation rules: {0}")]
    ParseError(String),

    /// A rule parsed but has an unusable value.
    #[error("rule {index}: {message}")]
    InvalidRule { index: usize, message: String },

    /// The rules could not be rendered as TOML.
    #[error("failed to serialize propagation rules: {0}")]
    SerializeError(String),
}

impl PropagationConfig {
    /// Parse and validate rules from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for malformed TOML or unknown
    /// fields, and `ConfigError::InvalidRule` for rules that fail validation.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render validated rules as TOML text.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        self.validate()?;
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    /// Apply every rule, in order, copying from `src` into `dest`.
    ///
    /// Each rule behaves like the matching `copy_*_by_prefix` call, so later
    /// rules overwrite keys written by earlier ones.
    pub fn apply<S, D>(&self, src: &S, dest: &mut D)
    where
        S: MetadataObject + ?Sized,
        D: MetadataObject + ?Sized,
    {
        for rule in &self.rules {
            copy_by_prefix(src, dest, rule.slot, &rule.prefix, rule.replacement_prefix());
        }
        debug!(rules = self.rules.len(), "applied propagation rules");
    }
}
