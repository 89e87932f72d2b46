//! Error types and handling for the Turboshaft view model
//!
//! Node queries never fail. Everything fallible lives at the edges of the
//! model: graph construction, token parsing and configuration loading.

use crate::core::types::{BlockId, NodeId};
use thiserror::Error;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the view model
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Graph construction errors
    #[error("Graph construction error: {0}")]
    Graph(#[from] GraphError),

    /// Token parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// I/O errors from std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while wiring nodes, blocks and edges together
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Edge endpoint refers to a node that was never added
    #[error("Node not found: {0}")]
    UnknownNode(NodeId),

    /// Node refers to a block that was never added
    #[error("Block not found: {0}")]
    UnknownBlock(BlockId),

    /// Node id already taken
    #[error("Node already exists: {0}")]
    DuplicateNode(NodeId),

    /// Block id already taken
    #[error("Block already exists: {0}")]
    DuplicateBlock(BlockId),

    /// Edge does not point back at the node it is attached to
    #[error("Edge {from} -> {to} cannot be attached to node {node}")]
    EdgeMismatch {
        /// Node the edge was pushed onto
        node: NodeId,
        /// Edge source
        from: NodeId,
        /// Edge target
        to: NodeId,
    },
}

/// Errors raised when converting textual tokens from a compiler dump
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unrecognised side-effect classification
    #[error("Unknown op properties type: {0:?}")]
    UnknownOpProperties(String),

    /// Unrecognised block kind
    #[error("Unknown block kind: {0:?}")]
    UnknownBlockKind(String),

    /// Identifier is not a non-negative integer
    #[error("Invalid id: {0:?}")]
    InvalidId(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
