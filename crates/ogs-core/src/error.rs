//! Error types for building value graphs.

use thiserror::Error;

/// Errors that can occur while constructing a value graph.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
