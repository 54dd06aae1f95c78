//! core
//!
//! Types, object capability, and operations for label and annotation
//! handling.
//!
//! # Modules
//!
//! - [`types`] - `MetadataMap`, `MetadataSlot`, `KeyMatch`
//! - [`object`] - The `MetadataObject` capability and `ObjectMeta`
//! - [`metadata`] - Query, add, prefix-read, and copy operations
//! - [`config`] - Declarative propagation rules

pub mod config;
pub mod metadata;
pub mod object;
pub mod types;
