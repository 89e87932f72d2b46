//! Graph data structures for the viewer
//!
//! Blocks, edges, the node contract and the Turboshaft node kind, plus the
//! arena that owns them.

pub mod block;
pub mod edge;
pub mod node;
pub mod op_properties;
pub mod turboshaft_graph;
pub mod turboshaft_node;

// Re-export main graph types
pub use block::{Block, BlockKind};
pub use edge::Edge;
pub use node::{DisplayLabel, GraphNode, NodeCore};
pub use op_properties::OpPropertiesType;
pub use turboshaft_graph::TurboshaftGraph;
pub use turboshaft_node::TurboshaftNode;
