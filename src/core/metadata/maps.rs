//! core::metadata::maps
//!
//! Pure map primitives shared by the label and annotation operations.
//!
//! Nothing here knows about objects or slots; every function works on plain
//! [`MetadataMap`] values.

use std::borrow::Cow;

use crate::core::types::{KeyMatch, MetadataMap};

/// Insert `key`/`value` into `destination` unless `key` is already present.
///
/// Returns `true` if the entry was inserted.
pub(crate) fn safe_insert(destination: &mut MetadataMap, key: &str, value: &str) -> bool {
    if destination.contains_key(key) {
        return false;
    }
    destination.insert(key.to_string(), value.to_string());
    true
}

/// Merge every entry of `source` into `destination` without overwriting.
///
/// Returns the number of entries actually inserted.
pub(crate) fn merge_entries(source: &MetadataMap, destination: &mut MetadataMap) -> usize {
    let mut inserted = 0;
    for (key, value) in source {
        if safe_insert(destination, key, value) {
            inserted += 1;
        }
    }
    inserted
}

/// Collect the entries of `entries` whose key matches `pattern` under `mode`.
pub(crate) fn select<'a: 'p, 'p>(
    entries: &'a MetadataMap,
    pattern: &'p str,
    mode: KeyMatch,
) -> impl Iterator<Item = (&'a String, &'a String)> + 'p {
    entries
        .iter()
        .filter(move |(key, _)| mode.matches(key, pattern))
}

/// Return the entries of `entries` whose key starts with `prefix`.
///
/// An empty prefix returns `entries` itself, borrowed. Any other prefix
/// returns a newly allocated map, empty when nothing matches.
pub(crate) fn filter_by_prefix<'a>(entries: &'a MetadataMap, prefix: &str) -> Cow<'a, MetadataMap> {
    if prefix.is_empty() {
        return Cow::Borrowed(entries);
    }
    Cow::Owned(
        select(entries, prefix, KeyMatch::Prefix)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    )
}

/// Copy entries whose key starts with `prefix` from `src` into `dest`,
/// replacing the first occurrence of `prefix` in each key with
/// `replacement_prefix`. Existing destination keys are overwritten.
///
/// Returns the number of entries written.
pub(crate) fn copy_with_new_prefix(
    src: &MetadataMap,
    dest: &mut MetadataMap,
    prefix: &str,
    replacement_prefix: &str,
) -> usize {
    let mut written = 0;
    for (key, value) in select(src, prefix, KeyMatch::Prefix) {
        let new_key = if prefix != replacement_prefix {
            key.replacen(prefix, replacement_prefix, 1)
        } else {
            key.clone()
        };
        dest.insert(new_key, value.clone());
        written += 1;
    }
    written
}
