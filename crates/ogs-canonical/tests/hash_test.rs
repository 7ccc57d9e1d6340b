//! Digest tests against captured golden vectors.

use chrono::{DateTime, Utc};
use ogs_canonical::{canonical_json_hash, digest, stream, to_canonical_string, HashCollector};
use ogs_core::{MapNode, Node};

fn epoch_millis(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap()
}

/// `{x: inner, y: {}, z: [], <date_key>: epoch+444ms}` with `inner` given
/// as (key, number) and ("z", "x") pairs.
fn reference_graph(date_key: &str, inner_key: &str, inner_value: i64) -> Node {
    let mut inner = MapNode::new();
    inner.insert(inner_key, inner_value);
    inner.insert("z", "x");
    let mut map = MapNode::new();
    map.insert("x", inner);
    map.insert("y", MapNode::new());
    map.insert("z", Node::Sequence(vec![]));
    map.insert(date_key, epoch_millis(444));
    Node::Map(map)
}

mod golden_vectors {
    use super::*;

    #[test]
    fn test_nested_string_map() {
        let node = Node::from(serde_json::json!({
            "kind": "test",
            "data": {"name": "object", "date": "2021-05-20"},
        }));
        assert_eq!(digest(&node), "5zWhdtvKuGob1FbW9vUGPQKobcLtYYr5wU8AxQRVraeB");
    }

    #[test]
    fn test_short_date_key() {
        let node = reference_graph("d", "y", 1);
        assert_eq!(digest(&node), "5PvJAWGkaKAHax6tsaKGfPYm6JfXxZs15wRTDpSKaZ2G");
    }

    #[test]
    fn test_long_date_key() {
        let node = reference_graph("date", "y", 2);
        assert_eq!(digest(&node), "ECVWfmcNaUGkgvPZe7CojrnRNULxNczKXU8PGns6UDvr");
    }

    #[test]
    fn test_inner_key_variation() {
        let node = reference_graph("date", "x", 1);
        assert_eq!(digest(&node), "EoYNGMtap1k9iEAGeVtHmJwpMjQLKWJmR27SG6aC9fSg");
    }
}

mod order_independence {
    use super::*;

    #[test]
    fn test_insertion_order_does_not_change_digest() {
        let forward = reference_graph("date", "x", 1);

        let mut inner = MapNode::new();
        inner.insert("z", "x");
        inner.insert("x", 1i64);
        let mut backward = MapNode::new();
        backward.insert("date", epoch_millis(444));
        backward.insert("z", Node::Sequence(vec![]));
        backward.insert("y", MapNode::new());
        backward.insert("x", inner);

        assert_eq!(digest(&forward), digest(&Node::Map(backward)));
    }

    #[test]
    fn test_distinct_graphs_digest_differently() {
        assert_ne!(
            digest(&reference_graph("date", "y", 1)),
            digest(&reference_graph("date", "y", 2))
        );
    }
}

mod conflation {
    use super::*;

    #[test]
    fn test_number_and_text_with_same_rendering_collide() {
        // The digest discards type information by contract.
        assert_eq!(digest(&Node::from(5i64)), digest(&Node::from("5")));
        assert_eq!(
            digest(&Node::from(serde_json::json!({"a": 5}))),
            digest(&Node::from(serde_json::json!({"a": "5"})))
        );
    }

    #[test]
    fn test_timestamp_hashes_as_its_iso_string() {
        let with_timestamp = Node::Sequence(vec![Node::from(epoch_millis(444))]);
        let with_text = Node::from(serde_json::json!(["1970-01-01T00:00:00.444Z"]));
        assert_eq!(digest(&with_timestamp), digest(&with_text));
    }

    #[test]
    fn test_structure_is_invisible_to_the_digest() {
        // Only attribute keys and scalar text feed the hash, so flattening
        // a sequence into its scalars does not change the digest.
        let nested = Node::from(serde_json::json!([1, ["2", "A"], "E"]));
        let flat = Node::from(serde_json::json!([1, "2", "A", "E"]));
        assert_eq!(digest(&nested), digest(&flat));
    }
}

mod collector_api {
    use super::*;

    #[test]
    fn test_manual_collector_matches_one_call_digest() {
        let node = reference_graph("date", "y", 1);
        let mut collector = HashCollector::new();
        stream(&node, &mut |event| collector.append(&event));
        assert_eq!(collector.digest(), digest(&node));
    }

    #[test]
    fn test_combined_text_and_digest_single_pass() {
        let node = reference_graph("date", "y", 2);
        let combined = canonical_json_hash(&node);
        assert_eq!(combined.json, to_canonical_string(&node));
        assert_eq!(combined.hash, digest(&node));
        assert_eq!(
            combined.json,
            r#"{"date":"1970-01-01T00:00:00.444Z","x":{"y":2,"z":"x"},"y":{},"z":[]}"#
        );
    }
}
