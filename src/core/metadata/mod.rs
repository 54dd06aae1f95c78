//! core::metadata
//!
//! Label and annotation operations on [`MetadataObject`] implementors.
//!
//! # Modules
//!
//! - [`ops`] - Public query, add, prefix-read, and copy operations
//! - [`error`] - Error type for operations that report absent objects
//! - `maps` - Map primitives shared by the operations
//!
//! # Semantics
//!
//! - Adding never overwrites: the first value written for a key wins
//! - Copying by prefix always overwrites, optionally renaming keys
//! - Slots are created on first write and never removed
//!
//! # Example
//!
//! ```
//! use objmeta::core::metadata::{add_annotations, get_annotations_with_prefix, MetadataMap};
//! use objmeta::core::object::ObjectMeta;
//!
//! let mut pod = ObjectMeta::named("web");
//! let mut entries = MetadataMap::new();
//! entries.insert("trace/id".into(), "abc".into());
//! entries.insert("owner".into(), "team-a".into());
//!
//! add_annotations(Some(&mut pod), &entries).unwrap();
//!
//! let traced = get_annotations_with_prefix(Some(&pod), "trace/").unwrap();
//! assert_eq!(traced.len(), 1);
//! ```
//!
//! [`MetadataObject`]: crate::core::object::MetadataObject

pub mod error;
mod maps;
pub mod ops;

// Re-export commonly used types
pub use crate::core::types::{MetadataMap, MetadataSlot};
pub use error::MetadataError;
pub use ops::{
    add_annotation, add_annotations, add_label, add_labels, copy_annotations_by_prefix,
    copy_labels_by_prefix, get_annotation, get_annotations_with_prefix, get_label,
    get_labels_with_prefix, has_annotation, has_annotation_with_value, has_label,
    has_label_with_value,
};
