//! Graph edge implementation

use crate::core::types::NodeId;
use serde::{Deserialize, Serialize};

/// Directed dependency from a producer to a consumer
///
/// Both endpoints are plain handles; the edge is copied onto the source's
/// outputs and the target's inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Producing node
    pub source: NodeId,
    /// Consuming node
    pub target: NodeId,
}

impl Edge {
    /// Create a new edge
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }
}
