//! Python bindings for canonical object-graph streaming
//!
//! This module provides Python functions for:
//! - Generating canonical (key-sorted) JSON representations
//! - Computing base-58 SHA-256 content digests
//! - Verifying digests against expected values

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use ogs_core::Node;

fn parse_node(json_str: &str) -> PyResult<Node> {
    let value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| PyValueError::new_err(format!("Invalid JSON: {}", e)))?;
    Ok(Node::from(value))
}

/// Convert a JSON string to its canonical representation.
///
/// Canonical JSON has:
/// - Keys sorted ascending by byte order
/// - Sequences in their original order
/// - No whitespace when `indent` is 0
///
/// Args:
///     json_str: A JSON string to canonicalize.
///     indent: Spaces per indentation level (0 renders compact).
///
/// Returns:
///     The canonical JSON string.
///
/// Raises:
///     ValueError: If the JSON is invalid.
#[pyfunction]
#[pyo3(signature = (json_str, indent = 0))]
fn canonicalize(json_str: &str, indent: usize) -> PyResult<String> {
    let node = parse_node(json_str)?;
    let props = ogs_canonical::JsonProps::indented(indent);
    Ok(ogs_canonical::to_canonical_string_with(&node, &props))
}

/// Compute the content digest of a JSON string.
///
/// The digest is the SHA-256 of the canonical event stream (attribute keys
/// and raw scalar text), rendered in base-58, and is independent of the
/// original key insertion order.
///
/// Args:
///     json_str: A JSON string to digest.
///
/// Returns:
///     The base-58 digest string.
///
/// Raises:
///     ValueError: If the JSON is invalid.
#[pyfunction]
fn digest(json_str: &str) -> PyResult<String> {
    let node = parse_node(json_str)?;
    Ok(ogs_canonical::digest(&node))
}

/// Verify that a digest matches the given JSON document.
///
/// Args:
///     json_str: A JSON string to verify.
///     expected: The expected base-58 digest.
///
/// Returns:
///     True if the digest matches, False otherwise.
///
/// Raises:
///     ValueError: If the JSON is invalid.
#[pyfunction]
fn verify_digest(json_str: &str, expected: &str) -> PyResult<bool> {
    let node = parse_node(json_str)?;
    Ok(ogs_canonical::verify_digest(&node, expected))
}

/// Python module for object-graph streaming bindings.
#[pymodule]
fn ogs_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(canonicalize, m)?)?;
    m.add_function(wrap_pyfunction!(digest, m)?)?;
    m.add_function(wrap_pyfunction!(verify_digest, m)?)?;
    Ok(())
}
