//! Public-API tests for the value graph model.

use chrono::DateTime;
use ogs_core::{MapNode, Node, Scalar, Shape};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_graph_built_by_hand_equals_graph_from_json() {
    let mut data = MapNode::new();
    data.insert("name", "object");
    data.insert("date", "2021-05-20");
    let mut root = MapNode::new();
    root.insert("kind", "test");
    root.insert("data", data);

    let from_json = Node::from(json!({
        "kind": "test",
        "data": {"name": "object", "date": "2021-05-20"},
    }));
    assert_eq!(Node::Map(root), from_json);
}

#[test]
fn test_keyed_access_surface() {
    let mut map = MapNode::new();
    map.insert("b", 2i64);
    map.insert("a", 1i64);

    let keys: Vec<&str> = map.keys().collect();
    assert_eq!(keys, vec!["b", "a"]);
    assert_eq!(map.get("a"), Some(&Node::from(1i64)));
    assert_eq!(map.get("missing"), None);
}

#[test]
fn test_sequence_order_is_preserved() {
    let node = Node::from(json!([3, 1, 2]));
    match node.classify() {
        Shape::Sequence(items) => {
            assert_eq!(items, &[Node::from(3i64), Node::from(1i64), Node::from(2i64)]);
        }
        other => panic!("sequence classified as {other:?}"),
    }
}

#[test]
fn test_every_scalar_kind_classifies_as_scalar() {
    let scalars = [
        Node::null(),
        Node::from(true),
        Node::from(4711i64),
        Node::from("text"),
        Node::from(DateTime::from_timestamp_millis(444).unwrap()),
    ];
    for node in &scalars {
        assert!(matches!(node.classify(), Shape::Scalar(_)), "{node:?}");
    }
}

#[test]
fn test_scalar_extraction_from_classification() {
    let node = Node::from("probe");
    let Shape::Scalar(scalar) = node.classify() else {
        panic!("text classified as a container");
    };
    assert_eq!(scalar, &Scalar::Text("probe".to_string()));
}
