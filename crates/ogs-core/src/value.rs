//! The value graph: nodes, keyed maps, and classification.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::NodeError;
use crate::scalar::{iso_instant, Scalar};

/// One node of a finite, acyclic value graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Sequence(Vec<Node>),
    Map(MapNode),
}

/// Classification of a node, borrowed from the graph.
#[derive(Debug)]
pub enum Shape<'a> {
    Scalar(&'a Scalar),
    Sequence(&'a [Node]),
    Map(&'a MapNode),
}

impl Node {
    /// Decide which of the three shapes this node is.
    ///
    /// Pure and side-effect free. A timestamp classifies as a scalar even
    /// though it is a structured temporal type.
    pub fn classify(&self) -> Shape<'_> {
        match self {
            Node::Scalar(scalar) => Shape::Scalar(scalar),
            Node::Sequence(items) => Shape::Sequence(items),
            Node::Map(map) => Shape::Map(map),
        }
    }

    pub fn null() -> Self {
        Node::Scalar(Scalar::Null)
    }

    /// Ingest any serializable value through `serde_json`.
    ///
    /// Timestamps cannot survive this route (serde renders them as strings
    /// first); build graphs with [`MapNode`] and the `From` conversions when
    /// temporal scalars matter.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, NodeError> {
        Ok(Node::from(serde_json::to_value(value)?))
    }
}

/// Keyed collection with unique keys.
///
/// Insertion order is preserved for iteration but carries no meaning; the
/// streamer orders keys through its ordering hook before descending. Keyed
/// access happens through [`MapNode::keys`] and [`MapNode::get`] only.
#[derive(Debug, Clone, Default)]
pub struct MapNode {
    entries: Vec<(String, Node)>,
}

impl MapNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, replacing any entry with the same key.
    ///
    /// Returns the value that was replaced, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) -> Option<Node> {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Maps compare as unordered collections: insertion order never takes part
/// in equality.
impl PartialEq for MapNode {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl FromIterator<(String, Node)> for MapNode {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        let mut map = MapNode::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for MapNode {
    type Item = (String, Node);
    type IntoIter = std::vec::IntoIter<(String, Node)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::Scalar(scalar)
    }
}

impl From<MapNode> for Node {
    fn from(map: MapNode) -> Self {
        Node::Map(map)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Sequence(items)
    }
}

impl From<bool> for Node {
    fn from(v: bool) -> Self {
        Node::Scalar(Scalar::from(v))
    }
}

impl From<i32> for Node {
    fn from(v: i32) -> Self {
        Node::Scalar(Scalar::from(v))
    }
}

impl From<i64> for Node {
    fn from(v: i64) -> Self {
        Node::Scalar(Scalar::from(v))
    }
}

impl From<u64> for Node {
    fn from(v: u64) -> Self {
        Node::Scalar(Scalar::from(v))
    }
}

impl From<f64> for Node {
    fn from(v: f64) -> Self {
        Node::Scalar(Scalar::from(v))
    }
}

impl From<&str> for Node {
    fn from(v: &str) -> Self {
        Node::Scalar(Scalar::from(v))
    }
}

impl From<String> for Node {
    fn from(v: String) -> Self {
        Node::Scalar(Scalar::from(v))
    }
}

impl From<DateTime<Utc>> for Node {
    fn from(v: DateTime<Utc>) -> Self {
        Node::Scalar(Scalar::from(v))
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Scalar(Scalar::Null),
            Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Node::Scalar(Scalar::Number(n)),
            Value::String(s) => Node::Scalar(Scalar::Text(s)),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => Node::Map(
                map.into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Node> for Value {
    /// Timestamps become their ISO-8601 instant strings; everything else
    /// maps one-to-one.
    fn from(node: Node) -> Self {
        match node {
            Node::Scalar(Scalar::Null) => Value::Null,
            Node::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            Node::Scalar(Scalar::Number(n)) => Value::Number(n),
            Node::Scalar(Scalar::Text(s)) => Value::String(s),
            Node::Scalar(Scalar::Timestamp(ts)) => Value::String(iso_instant(&ts)),
            Node::Sequence(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Node::Map(map) => {
                let mut out = Map::new();
                for (key, value) in map {
                    out.insert(key, Value::from(value));
                }
                Value::Object(out)
            }
        }
    }
}
