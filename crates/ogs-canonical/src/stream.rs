//! Depth-first traversal of a value graph into structural events.

use ogs_core::{EncodedScalar, Event, Node, Path, Scalar, Shape};

/// Orders a map's keys before iteration.
///
/// Must be a pure reordering with no retained state; returning keys that are
/// not in the map yields non-canonical output (the unknown keys are skipped).
pub type MapKeyOrderFn = dyn for<'a> Fn(Vec<&'a str>) -> Vec<&'a str>;

/// Orders a sequence's elements before iteration. Must be a pure reordering
/// with no retained state.
pub type SequenceOrderFn = dyn for<'a> Fn(Vec<&'a Node>) -> Vec<&'a Node>;

/// Converts a raw scalar into the encoded form carried by value events.
pub type ScalarEncodingFn = dyn Fn(&Scalar) -> EncodedScalar;

/// Traversal configuration.
///
/// Every field is independently overridable and inherited unchanged by all
/// children of the node it applies to.
pub struct StreamOptions {
    /// Path prefix prepended to every emitted path. Supports resuming
    /// traversal context for sub-calls.
    pub path: Path,
    /// Map key ordering. The default sorts ascending by byte order, which is
    /// what makes text and digest output independent of insertion order.
    pub map_key_order: Box<MapKeyOrderFn>,
    /// Sequence ordering. The default keeps the caller's order.
    pub sequence_order: Box<SequenceOrderFn>,
    /// Scalar encoding. The default is the canonical JSON literal form.
    pub scalar_encoding: Box<ScalarEncodingFn>,
}

impl Default for StreamOptions {
    fn default() -> Self {
        Self {
            path: Vec::new(),
            map_key_order: Box::new(|mut keys: Vec<&str>| {
                keys.sort_unstable();
                keys
            }),
            sequence_order: Box::new(|items: Vec<&Node>| items),
            scalar_encoding: Box::new(|scalar: &Scalar| EncodedScalar::json(scalar.clone())),
        }
    }
}

/// Stream `node` depth-first into `sink` with default options.
///
/// Events are emitted synchronously, in canonical order, and the call
/// returns only after the entire subtree has been emitted. Recursion depth
/// equals graph depth; guarding against pathologically deep inputs is the
/// caller's responsibility.
pub fn stream<F>(node: &Node, sink: &mut F)
where
    F: FnMut(Event),
{
    stream_with(node, sink, &StreamOptions::default());
}

/// Stream `node` with explicit [`StreamOptions`].
pub fn stream_with<F>(node: &Node, sink: &mut F, options: &StreamOptions)
where
    F: FnMut(Event),
{
    walk(node, sink, &options.path, options);
}

fn walk<F>(node: &Node, sink: &mut F, path: &[String], options: &StreamOptions)
where
    F: FnMut(Event),
{
    match node.classify() {
        Shape::Sequence(items) => {
            let mut start_path = path.to_vec();
            start_path.push("[".to_string());
            sink(Event::SequenceStart {
                path: start_path.clone(),
            });
            for (index, item) in (options.sequence_order)(items.iter().collect())
                .into_iter()
                .enumerate()
            {
                let mut child_path = start_path.clone();
                child_path.push(index.to_string());
                walk(item, sink, &child_path, options);
            }
            let mut end_path = path.to_vec();
            end_path.push("]".to_string());
            sink(Event::SequenceEnd { path: end_path });
        }
        Shape::Map(map) => {
            let mut start_path = path.to_vec();
            start_path.push("{".to_string());
            sink(Event::MapStart {
                path: start_path.clone(),
            });
            for key in (options.map_key_order)(map.keys().collect()) {
                let Some(child) = map.get(key) else {
                    continue;
                };
                let mut attr_path = start_path.clone();
                attr_path.push(key.to_string());
                sink(Event::Attribute {
                    key: key.to_string(),
                    path: attr_path.clone(),
                });
                walk(child, sink, &attr_path, options);
            }
            let mut end_path = path.to_vec();
            end_path.push("}".to_string());
            sink(Event::MapEnd { path: end_path });
        }
        Shape::Scalar(scalar) => {
            sink(Event::Value {
                value: (options.scalar_encoding)(scalar),
                path: path.to_vec(),
            });
        }
    }
}
