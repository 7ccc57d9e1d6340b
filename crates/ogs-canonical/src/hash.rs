//! Content digests folded from the event stream.

use ogs_core::{Event, Node};
use sha2::{Digest, Sha256};

use crate::stream::stream;

/// Folds traversal events into a running SHA-256.
///
/// Attribute keys and raw scalar stringifications feed the hash with no
/// quoting, no type tags, and no delimiters; structural events contribute
/// nothing. Canonical map-key ordering alone makes the digest independent of
/// insertion order. Timestamps feed their ISO-8601 instant string; every
/// other scalar feeds its plain textual form, so scalars that stringify
/// identically hash identically.
pub struct HashCollector {
    hasher: Sha256,
}

impl HashCollector {
    pub fn new() -> Self {
        Self {
            hasher: Sha256::new(),
        }
    }

    /// Fold one event into the digest.
    pub fn append(&mut self, event: &Event) {
        match event {
            Event::Attribute { key, .. } => self.hasher.update(key.as_bytes()),
            Event::Value { value, .. } => {
                self.hasher.update(value.as_value().to_plain().as_bytes());
            }
            _ => {}
        }
    }

    /// Finalize the accumulator and render the digest in base-58.
    ///
    /// Consumes the collector, so the digest is taken exactly once.
    pub fn digest(self) -> String {
        bs58::encode(self.hasher.finalize()).into_string()
    }
}

impl Default for HashCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Digest a whole graph in one call.
pub fn digest(node: &Node) -> String {
    let mut collector = HashCollector::new();
    stream(node, &mut |event| collector.append(&event));
    collector.digest()
}

/// Recompute a graph's digest and compare it against `expected`.
pub fn verify_digest(node: &Node, expected: &str) -> bool {
    constant_time_compare(&digest(node), expected)
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
