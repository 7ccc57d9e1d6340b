//! # OGS Core
//!
//! Data model for canonical object-graph streaming.
//!
//! This crate provides:
//! - The [`Node`] sum type classifying every input value as a scalar,
//!   sequence, or keyed map
//! - [`Scalar`] values with their two canonical encodings (JSON literal and
//!   raw text)
//! - The [`Event`] variants emitted during traversal, each carrying its
//!   [`Path`]
//! - Conversions to and from `serde_json::Value`
//!
//! ## Example
//!
//! ```rust
//! use ogs_core::{MapNode, Node};
//!
//! let mut map = MapNode::new();
//! map.insert("y", 1i64);
//! map.insert("x", 2i64);
//! let node = Node::Map(map);
//!
//! // Insertion order is preserved but never meaningful; the streamer
//! // orders keys canonically before iterating.
//! assert_eq!(node, Node::from(serde_json::json!({"x": 2, "y": 1})));
//! ```

pub mod error;
pub mod event;
pub mod scalar;
pub mod value;

pub use error::*;
pub use event::*;
pub use scalar::*;
pub use value::*;
