//! objmeta - label and annotation helpers for orchestration objects
//!
//! Objects in an orchestration system carry two string maps: labels, used
//! for identification and selection, and annotations, used for arbitrary
//! metadata. This crate reads, adds, and copies entries in those maps,
//! optionally filtered or renamed by a key prefix, and tolerates objects
//! whose maps have not been created yet.
//!
//! # Architecture
//!
//! - [`core::object`] - The `MetadataObject` trait a host object implements
//! - [`core::metadata`] - Operations, written once per slot and exposed for
//!   labels and annotations
//! - [`core::config`] - TOML-defined propagation rules built on the copy
//!   operation
//!
//! # Invariants
//!
//! 1. Adding entries never overwrites an existing key
//! 2. Copying by prefix always overwrites
//! 3. Maps are created on first write and never removed
//! 4. No reference into an object is retained past a single call

pub mod core;
