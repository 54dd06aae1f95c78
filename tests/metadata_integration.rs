//! Integration tests for label and annotation operations.
//!
//! These tests drive the public API through a host object type defined
//! here, the way a caller embedding this crate would.

use std::borrow::Cow;

use objmeta::core::config::PropagationConfig;
use objmeta::core::metadata::{
    add_annotation, add_annotations, add_label, add_labels, copy_annotations_by_prefix,
    copy_labels_by_prefix, get_annotation, get_annotations_with_prefix, get_label,
    get_labels_with_prefix, has_annotation, has_annotation_with_value, has_label,
    has_label_with_value, MetadataError, MetadataMap,
};
use objmeta::core::object::{MetadataObject, ObjectMeta};

/// A host object that keeps its metadata nested, like a workload resource.
#[derive(Debug, Default, Clone, PartialEq)]
struct Deployment {
    metadata: ObjectMeta,
    replicas: u32,
}

impl MetadataObject for Deployment {
    fn annotations(&self) -> Option<&MetadataMap> {
        self.metadata.annotations()
    }

    fn take_annotations(&mut self) -> Option<MetadataMap> {
        self.metadata.take_annotations()
    }

    fn set_annotations(&mut self, annotations: MetadataMap) {
        self.metadata.set_annotations(annotations)
    }

    fn labels(&self) -> Option<&MetadataMap> {
        self.metadata.labels()
    }

    fn take_labels(&mut self) -> Option<MetadataMap> {
        self.metadata.take_labels()
    }

    fn set_labels(&mut self, labels: MetadataMap) {
        self.metadata.set_labels(labels)
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn map(entries: &[(&str, &str)]) -> MetadataMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn no_object() -> Option<&'static Deployment> {
    None
}

#[test]
fn add_then_query_annotation() {
    init_tracing();
    let mut deployment = Deployment::default();

    add_annotation(Some(&mut deployment), "foo", "bar");

    assert!(has_annotation(Some(&deployment), "foo"));
    assert!(has_annotation_with_value(Some(&deployment), "foo", "bar"));
    assert_eq!(deployment.metadata.annotations, Some(map(&[("foo", "bar")])));
    assert_eq!(deployment.replicas, 0);
}

#[test]
fn add_then_query_label() {
    init_tracing();
    let mut deployment = Deployment::default();

    add_label(Some(&mut deployment), "foo", "bar");

    assert!(has_label(Some(&deployment), "foo"));
    assert!(has_label_with_value(Some(&deployment), "foo", "bar"));
    assert!(!has_annotation(Some(&deployment), "foo"));
}

#[test]
fn bulk_add_merges_without_clobbering() {
    init_tracing();
    let mut deployment = Deployment::default();
    deployment.set_labels(map(&[("quux", "corge"), ("foo", "kept")]));

    add_labels(Some(&mut deployment), &map(&[("foo", "bar"), ("baz", "qux")])).unwrap();

    assert_eq!(
        deployment.metadata.labels,
        Some(map(&[("quux", "corge"), ("foo", "kept"), ("baz", "qux")]))
    );
}

#[test]
fn bulk_add_on_absent_object_errors() {
    init_tracing();
    let annotations = add_annotations(None::<&mut Deployment>, &MetadataMap::new());
    let labels = add_labels(None::<&mut Deployment>, &MetadataMap::new());

    assert_eq!(annotations, Err(MetadataError::NilObject));
    assert_eq!(labels.unwrap_err().to_string(), "object cannot be nil");
}

#[test]
fn prefix_reads() {
    init_tracing();
    let mut deployment = Deployment::default();
    add_annotations(
        Some(&mut deployment),
        &map(&[("bar", "foo"), ("baz", "qux")]),
    )
    .unwrap();

    let matched = get_annotations_with_prefix(Some(&deployment), "ba").unwrap();
    assert_eq!(*matched, map(&[("bar", "foo"), ("baz", "qux")]));

    let none = get_annotations_with_prefix(Some(&deployment), "nil").unwrap();
    assert!(none.is_empty());

    let err = get_annotations_with_prefix(no_object(), "x");
    assert_eq!(err, Err(MetadataError::NilObject));
    assert!(get_labels_with_prefix(no_object(), "x")
        .unwrap_or_default()
        .is_empty());
}

#[test]
fn empty_prefix_read_aliases_live_map() {
    let mut deployment = Deployment::default();
    add_label(Some(&mut deployment), "app", "web");

    let all = get_labels_with_prefix(Some(&deployment), "").unwrap();
    assert!(matches!(all, Cow::Borrowed(_)));

    let detached = all.into_owned();
    add_label(Some(&mut deployment), "tier", "frontend");
    assert_eq!(detached, map(&[("app", "web")]));
    assert_eq!(deployment.metadata.labels.map(|l| l.len()), Some(2));
}

#[test]
fn copy_annotations_with_rename() {
    init_tracing();
    let mut src = Deployment::default();
    src.set_annotations(map(&[("foo", "bar"), ("foz", "qux")]));
    let mut dest = ObjectMeta::named("dest");
    dest.set_annotations(map(&[("quux", "corge")]));

    copy_annotations_by_prefix(&src, &mut dest, "fo", "ba");

    assert_eq!(
        dest.annotations,
        Some(map(&[("bao", "bar"), ("baz", "qux"), ("quux", "corge")]))
    );
}

#[test]
fn copy_labels_without_source_slot_is_noop() {
    let src = Deployment::default();
    let mut dest = Deployment::default();
    dest.set_labels(map(&[("quux", "corge")]));
    let before = dest.clone();

    copy_labels_by_prefix(&src, &mut dest, "fo", "ba");

    assert_eq!(dest, before);
}

#[test]
fn copy_overwrites_but_add_does_not() {
    let mut src = ObjectMeta::default();
    src.set_labels(map(&[("app/name", "new")]));

    let mut added = Deployment::default();
    add_label(Some(&mut added), "app/name", "old");
    add_labels(Some(&mut added), src.labels().unwrap()).unwrap();
    assert_eq!(get_label(Some(&added), "app/name"), Some("old"));

    let mut copied = Deployment::default();
    add_label(Some(&mut copied), "app/name", "old");
    copy_labels_by_prefix(&src, &mut copied, "app/", "app/");
    assert_eq!(get_label(Some(&copied), "app/name"), Some("new"));
}

#[test]
fn lenient_and_exact_lookups_differ() {
    let mut deployment = Deployment::default();
    add_annotation(Some(&mut deployment), "foobar", "baz");

    assert!(has_annotation(Some(&deployment), "foo"));
    assert_eq!(get_annotation(Some(&deployment), "foo"), None);
    assert_eq!(get_annotation(Some(&deployment), "foobar"), Some("baz"));
}

#[test]
fn convenience_forms_swallow_absent_object() {
    init_tracing();
    add_annotation(None::<&mut Deployment>, "foo", "bar");
    add_label(None::<&mut Deployment>, "foo", "bar");

    assert!(!has_annotation(no_object(), "foo"));
    assert!(!has_annotation_with_value(no_object(), "foo", "bar"));
    assert!(!has_label(no_object(), "foo"));
    assert!(!has_label_with_value(no_object(), "foo", "bar"));
}

#[test]
fn propagation_between_host_objects() {
    init_tracing();
    let config = PropagationConfig::from_toml_str(
        r#"
        [[rules]]
        slot = "labels"
        prefix = "app.example.com/"
        replacement = "owner.example.com/"

        [[rules]]
        slot = "annotations"
        prefix = "trace/"
        "#,
    )
    .unwrap();

    let mut parent = Deployment::default();
    add_labels(
        Some(&mut parent),
        &map(&[("app.example.com/name", "web"), ("team", "a")]),
    )
    .unwrap();
    add_annotation(Some(&mut parent), "trace/id", "abc");

    let mut pod = ObjectMeta::named("web-0").in_namespace("prod");
    config.apply(&parent, &mut pod);

    assert_eq!(pod.labels, Some(map(&[("owner.example.com/name", "web")])));
    assert_eq!(pod.annotations, Some(map(&[("trace/id", "abc")])));
}
