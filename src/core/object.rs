//! core::object
//!
//! The capability an object must provide for its labels and annotations to
//! be managed by this crate.
//!
//! # Ownership
//!
//! Go-style object models hand out live map references from their getters.
//! Here reads borrow the map and writes move it: an operation takes the map
//! out of the object, modifies it, and sets it back. No reference into the
//! object outlives a single call.
//!
//! # Example
//!
//! ```
//! use objmeta::core::object::{MetadataObject, ObjectMeta};
//!
//! let mut meta = ObjectMeta::named("web");
//! assert!(meta.labels().is_none());
//!
//! let mut labels = meta.take_labels().unwrap_or_default();
//! labels.insert("tier".into(), "frontend".into());
//! meta.set_labels(labels);
//!
//! assert_eq!(meta.labels().unwrap()["tier"], "frontend");
//! ```

use serde::{Deserialize, Serialize};

use crate::core::types::{MetadataMap, MetadataSlot};

/// An object carrying optional label and annotation maps.
///
/// Both slots start out absent. Implementors only store and hand back the
/// maps; all merge and filter semantics live in [`crate::core::metadata`].
pub trait MetadataObject {
    /// Borrow the annotations map, if one has been set.
    fn annotations(&self) -> Option<&MetadataMap>;

    /// Remove and return the annotations map, leaving the slot absent.
    fn take_annotations(&mut self) -> Option<MetadataMap>;

    /// Replace the annotations map.
    fn set_annotations(&mut self, annotations: MetadataMap);

    /// Borrow the labels map, if one has been set.
    fn labels(&self) -> Option<&MetadataMap>;

    /// Remove and return the labels map, leaving the slot absent.
    fn take_labels(&mut self) -> Option<MetadataMap>;

    /// Replace the labels map.
    fn set_labels(&mut self, labels: MetadataMap);
}

impl MetadataSlot {
    /// Borrow this slot's map on `object`.
    pub fn get<'a, O: MetadataObject + ?Sized>(&self, object: &'a O) -> Option<&'a MetadataMap> {
        match self {
            MetadataSlot::Labels => object.labels(),
            MetadataSlot::Annotations => object.annotations(),
        }
    }

    /// Take this slot's map out of `object`.
    pub fn take<O: MetadataObject + ?Sized>(&self, object: &mut O) -> Option<MetadataMap> {
        match self {
            MetadataSlot::Labels => object.take_labels(),
            MetadataSlot::Annotations => object.take_annotations(),
        }
    }

    /// Store `map` in this slot of `object`.
    pub fn set<O: MetadataObject + ?Sized>(&self, object: &mut O, map: MetadataMap) {
        match self {
            MetadataSlot::Labels => object.set_labels(map),
            MetadataSlot::Annotations => object.set_annotations(map),
        }
    }

    /// Run `f` against this slot's map, creating an empty map first if the
    /// slot is absent. The map is always stored back afterwards.
    pub fn update<O, F, R>(&self, object: &mut O, f: F) -> R
    where
        O: MetadataObject + ?Sized,
        F: FnOnce(&mut MetadataMap) -> R,
    {
        let mut map = match self.take(object) {
            Some(map) => map,
            None => {
                tracing::trace!(slot = %self, "creating empty metadata map");
                MetadataMap::new()
            }
        };
        let result = f(&mut map);
        self.set(object, map);
        result
    }
}

/// Minimal object metadata record.
///
/// Serializes with the camelCase field names used by orchestration APIs and
/// omits absent slots, so a freshly created record round-trips as `{}` plus
/// whatever identity fields are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Object name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Namespace the object lives in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Labels slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<MetadataMap>,

    /// Annotations slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<MetadataMap>,
}

impl ObjectMeta {
    /// Create an empty record with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the namespace.
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

impl MetadataObject for ObjectMeta {
    fn annotations(&self) -> Option<&MetadataMap> {
        self.annotations.as_ref()
    }

    fn take_annotations(&mut self) -> Option<MetadataMap> {
        self.annotations.take()
    }

    fn set_annotations(&mut self, annotations: MetadataMap) {
        self.annotations = Some(annotations);
    }

    fn labels(&self) -> Option<&MetadataMap> {
        self.labels.as_ref()
    }

    fn take_labels(&mut self) -> Option<MetadataMap> {
        self.labels.take()
    }

    fn set_labels(&mut self, labels: MetadataMap) {
        self.labels = Some(labels);
    }
}
