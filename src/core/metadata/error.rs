//! core::metadata::error
//!
//! Errors from label and annotation operations.

use thiserror::Error;

/// Errors from metadata operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MetadataError {
    /// The target object reference was absent.
    #[error("object cannot be nil")]
    NilObject,
}
