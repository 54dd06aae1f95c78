//! core::metadata::ops
//!
//! Label and annotation operations.
//!
//! # Structure
//!
//! Each operation is implemented once as a private function taking a
//! [`MetadataSlot`], then exposed as a label variant and an annotation
//! variant with identical semantics.
//!
//! # Absent Objects
//!
//! An absent object is passed as `None`. Operations that return `Result`
//! report it as [`MetadataError::NilObject`]. The convenience forms
//! (`has_*`, `add_label`, `add_annotation`) collapse that error to `false`
//! or a no-op, so their callers cannot tell "not found" from "no object".
//!
//! # Key Matching
//!
//! `has_label`, `has_annotation` and their `_with_value` forms match the
//! key as a *prefix*: a query for `"foo"` is satisfied by a stored
//! `"foobar"`. Existing callers depend on this. Use [`get_label`] or
//! [`get_annotation`] when an exact key is required.
//!
//! # Overwrite Rules
//!
//! `add_*` never overwrites an existing key. `copy_*_by_prefix` always
//! overwrites. The two paths differ on purpose and should not be unified
//! without auditing callers.
//!
//! # Example
//!
//! ```
//! use objmeta::core::metadata::ops::*;
//! use objmeta::core::object::ObjectMeta;
//!
//! let mut pod = ObjectMeta::named("web");
//! add_label(Some(&mut pod), "app.example.com/tier", "frontend");
//!
//! assert!(has_label(Some(&pod), "app.example.com/tier"));
//! assert!(has_label_with_value(Some(&pod), "app.example.com/", "frontend"));
//! assert_eq!(get_label(Some(&pod), "app.example.com/tier"), Some("frontend"));
//!
//! let mut child = ObjectMeta::named("web-0");
//! copy_labels_by_prefix(&pod, &mut child, "app.example.com/", "pod.example.com/");
//! assert_eq!(get_label(Some(&child), "pod.example.com/tier"), Some("frontend"));
//! ```

use std::borrow::Cow;

use tracing::{debug, trace};

use super::error::MetadataError;
use super::maps::{copy_with_new_prefix, filter_by_prefix, merge_entries, select};
use crate::core::object::MetadataObject;
use crate::core::types::{KeyMatch, MetadataMap, MetadataSlot};

// =============================================================================
// Slot engine
// =============================================================================

fn entries_with_prefix<'a, O>(
    object: Option<&'a O>,
    slot: MetadataSlot,
    prefix: &str,
) -> Result<Cow<'a, MetadataMap>, MetadataError>
where
    O: MetadataObject + ?Sized,
{
    let object = object.ok_or(MetadataError::NilObject)?;
    Ok(match slot.get(object) {
        Some(entries) => filter_by_prefix(entries, prefix),
        None => Cow::Owned(MetadataMap::new()),
    })
}

fn add_entries<O>(
    object: Option<&mut O>,
    slot: MetadataSlot,
    entries: &MetadataMap,
) -> Result<(), MetadataError>
where
    O: MetadataObject + ?Sized,
{
    let object = object.ok_or(MetadataError::NilObject)?;
    let inserted = slot.update(object, |existing| merge_entries(entries, existing));
    trace!(%slot, requested = entries.len(), inserted, "merged metadata entries");
    Ok(())
}

fn add_entry<O>(object: Option<&mut O>, slot: MetadataSlot, key: &str, value: &str)
where
    O: MetadataObject + ?Sized,
{
    let mut entries = MetadataMap::new();
    entries.insert(key.to_string(), value.to_string());

    if let Err(err) = add_entries(object, slot, &entries) {
        debug!(%slot, key, %err, "ignoring metadata add");
    }
}

/// Collapse a lookup result to `false` when the object was absent.
fn found_or_false(
    lookup: Result<Cow<'_, MetadataMap>, MetadataError>,
    slot: MetadataSlot,
    key: &str,
    predicate: impl FnOnce(&MetadataMap) -> bool,
) -> bool {
    match lookup {
        Ok(entries) => predicate(&entries),
        Err(err) => {
            trace!(%slot, key, %err, "metadata lookup on absent object");
            false
        }
    }
}

fn has_key<O>(object: Option<&O>, slot: MetadataSlot, key: &str) -> bool
where
    O: MetadataObject + ?Sized,
{
    found_or_false(entries_with_prefix(object, slot, key), slot, key, |entries| {
        !entries.is_empty()
    })
}

fn has_key_with_value<O>(object: Option<&O>, slot: MetadataSlot, key: &str, value: &str) -> bool
where
    O: MetadataObject + ?Sized,
{
    found_or_false(entries_with_prefix(object, slot, key), slot, key, |entries| {
        entries.values().any(|v| v == value)
    })
}

fn get_value<'a, O>(object: Option<&'a O>, slot: MetadataSlot, key: &str) -> Option<&'a str>
where
    O: MetadataObject + ?Sized,
{
    let entries = slot.get(object?)?;
    select(entries, key, KeyMatch::Exact)
        .next()
        .map(|(_, value)| value.as_str())
}

pub(crate) fn copy_by_prefix<S, D>(
    src: &S,
    dest: &mut D,
    slot: MetadataSlot,
    prefix: &str,
    replacement_prefix: &str,
) where
    S: MetadataObject + ?Sized,
    D: MetadataObject + ?Sized,
{
    let Some(source) = slot.get(src) else {
        trace!(%slot, prefix, "source has no metadata, nothing to copy");
        return;
    };
    let written = slot.update(dest, |destination| {
        copy_with_new_prefix(source, destination, prefix, replacement_prefix)
    });
    debug!(
        %slot,
        prefix,
        replacement_prefix,
        written,
        "copied metadata by prefix"
    );
}

// =============================================================================
// Existence and value queries
// =============================================================================

/// Check whether an annotation key exists.
///
/// The key is matched as a prefix. Returns `false` if `object` is `None`.
pub fn has_annotation<O: MetadataObject + ?Sized>(object: Option<&O>, key: &str) -> bool {
    has_key(object, MetadataSlot::Annotations, key)
}

/// Check whether an annotation with the given key and value exists.
///
/// The key is matched as a prefix; any matching entry with an equal value
/// satisfies the query. Returns `false` if `object` is `None`.
pub fn has_annotation_with_value<O: MetadataObject + ?Sized>(
    object: Option<&O>,
    key: &str,
    value: &str,
) -> bool {
    has_key_with_value(object, MetadataSlot::Annotations, key, value)
}

/// Check whether a label key exists.
///
/// The key is matched as a prefix. Returns `false` if `object` is `None`.
pub fn has_label<O: MetadataObject + ?Sized>(object: Option<&O>, key: &str) -> bool {
    has_key(object, MetadataSlot::Labels, key)
}

/// Check whether a label with the given key and value exists.
///
/// The key is matched as a prefix. Returns `false` if `object` is `None`.
pub fn has_label_with_value<O: MetadataObject + ?Sized>(
    object: Option<&O>,
    key: &str,
    value: &str,
) -> bool {
    has_key_with_value(object, MetadataSlot::Labels, key, value)
}

/// Look up an annotation value by exact key.
pub fn get_annotation<'a, O: MetadataObject + ?Sized>(
    object: Option<&'a O>,
    key: &str,
) -> Option<&'a str> {
    get_value(object, MetadataSlot::Annotations, key)
}

/// Look up a label value by exact key.
pub fn get_label<'a, O: MetadataObject + ?Sized>(
    object: Option<&'a O>,
    key: &str,
) -> Option<&'a str> {
    get_value(object, MetadataSlot::Labels, key)
}

// =============================================================================
// Single-entry mutation
// =============================================================================

/// Add one annotation, keeping any existing value for `key`.
///
/// Does nothing if `object` is `None`.
pub fn add_annotation<O: MetadataObject + ?Sized>(object: Option<&mut O>, key: &str, value: &str) {
    add_entry(object, MetadataSlot::Annotations, key, value)
}

/// Add one label, keeping any existing value for `key`.
///
/// Does nothing if `object` is `None`.
pub fn add_label<O: MetadataObject + ?Sized>(object: Option<&mut O>, key: &str, value: &str) {
    add_entry(object, MetadataSlot::Labels, key, value)
}

// =============================================================================
// Bulk mutation
// =============================================================================

/// Merge `entries` into the object's annotations.
///
/// Creates the annotations map if absent. Keys already present keep their
/// current values.
///
/// # Errors
///
/// Returns [`MetadataError::NilObject`] if `object` is `None`.
pub fn add_annotations<O: MetadataObject + ?Sized>(
    object: Option<&mut O>,
    entries: &MetadataMap,
) -> Result<(), MetadataError> {
    add_entries(object, MetadataSlot::Annotations, entries)
}

/// Merge `entries` into the object's labels.
///
/// Creates the labels map if absent. Keys already present keep their
/// current values.
///
/// # Errors
///
/// Returns [`MetadataError::NilObject`] if `object` is `None`.
pub fn add_labels<O: MetadataObject + ?Sized>(
    object: Option<&mut O>,
    entries: &MetadataMap,
) -> Result<(), MetadataError> {
    add_entries(object, MetadataSlot::Labels, entries)
}

// =============================================================================
// Prefix-filtered reads
// =============================================================================

/// Return the annotations whose key starts with `prefix`.
///
/// A non-empty prefix yields [`Cow::Owned`], a fresh map that is empty when
/// nothing matches. An empty prefix yields [`Cow::Borrowed`], a reference to
/// the object's live annotations map; call `into_owned()` to detach it.
///
/// # Errors
///
/// Returns [`MetadataError::NilObject`] if `object` is `None`. Use
/// `unwrap_or_default()` to treat that as an empty result.
pub fn get_annotations_with_prefix<'a, O: MetadataObject + ?Sized>(
    object: Option<&'a O>,
    prefix: &str,
) -> Result<Cow<'a, MetadataMap>, MetadataError> {
    entries_with_prefix(object, MetadataSlot::Annotations, prefix)
}

/// Return the labels whose key starts with `prefix`.
///
/// See [`get_annotations_with_prefix`] for ownership of the result.
///
/// # Errors
///
/// Returns [`MetadataError::NilObject`] if `object` is `None`.
pub fn get_labels_with_prefix<'a, O: MetadataObject + ?Sized>(
    object: Option<&'a O>,
    prefix: &str,
) -> Result<Cow<'a, MetadataMap>, MetadataError> {
    entries_with_prefix(object, MetadataSlot::Labels, prefix)
}

// =============================================================================
// Cross-object copy
// =============================================================================

/// Copy annotations whose key starts with `prefix` from `src` to `dest`.
///
/// When `replacement_prefix` differs from `prefix`, the first occurrence of
/// `prefix` in each copied key is replaced. Existing keys in `dest` are
/// overwritten. Does nothing if `src` has no annotations.
pub fn copy_annotations_by_prefix<S, D>(
    src: &S,
    dest: &mut D,
    prefix: &str,
    replacement_prefix: &str,
) where
    S: MetadataObject + ?Sized,
    D: MetadataObject + ?Sized,
{
    copy_by_prefix(src, dest, MetadataSlot::Annotations, prefix, replacement_prefix)
}

/// Copy labels whose key starts with `prefix` from `src` to `dest`.
///
/// Same renaming and overwrite rules as [`copy_annotations_by_prefix`].
/// Does nothing if `src` has no labels.
pub fn copy_labels_by_prefix<S, D>(src: &S, dest: &mut D, prefix: &str, replacement_prefix: &str)
where
    S: MetadataObject + ?Sized,
    D: MetadataObject + ?Sized,
{
    copy_by_prefix(src, dest, MetadataSlot::Labels, prefix, replacement_prefix)
}
