//! # OGS Canonical
//!
//! Deterministic traversal of value graphs into structural events, with two
//! reference consumers: canonical JSON text and base-58 SHA-256 content
//! digests.
//!
//! ## Canonical rules
//!
//! 1. Map keys are ordered ascending by byte order before iteration
//! 2. Sequences keep the caller's order
//! 3. Scalars render as standard JSON literals; timestamps as ISO-8601
//!    instants with millisecond precision, UTC, `Z` suffix
//! 4. The digest folds attribute keys and raw scalar text only; structure
//!    contributes nothing, so equal graphs digest equally regardless of
//!    insertion order
//!
//! ## Example
//!
//! ```rust
//! use ogs_canonical::{digest, to_canonical_string};
//! use ogs_core::Node;
//!
//! let forward = Node::from(serde_json::json!({"y": 1, "x": 2}));
//! let backward = Node::from(serde_json::json!({"x": 2, "y": 1}));
//!
//! assert_eq!(to_canonical_string(&forward), r#"{"x":2,"y":1}"#);
//! assert_eq!(digest(&forward), digest(&backward));
//! ```

mod hash;
mod json;
mod stream;

pub use hash::*;
pub use json::*;
pub use stream::*;

use ogs_core::Node;

/// Canonical text and digest produced from a single traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonHash {
    pub json: String,
    pub hash: String,
}

/// Render canonical text and compute the digest in one pass over the graph.
pub fn canonical_json_hash(node: &Node) -> JsonHash {
    let mut json = String::new();
    let mut text = JsonCollector::new(|chunk: &str| json.push_str(chunk));
    let mut hash = HashCollector::new();
    stream(node, &mut |event| {
        text.append(&event);
        hash.append(&event);
    });
    drop(text);
    JsonHash {
        json,
        hash: hash.digest(),
    }
}
