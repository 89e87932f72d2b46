//! Arena owning the blocks, nodes and edges of one Turboshaft graph
//!
//! Nodes and blocks refer to each other only through ids, so the arena is
//! the single owner and everything is dropped together with it.

use crate::core::error::GraphError;
use crate::core::types::{BlockId, NodeId};
use crate::graph::block::{Block, BlockKind};
use crate::graph::edge::Edge;
use crate::graph::node::GraphNode;
use crate::graph::op_properties::OpPropertiesType;
use crate::graph::turboshaft_node::TurboshaftNode;
use crate::measure::TextMeasure;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A Turboshaft graph under construction or inspection
#[derive(Debug, Default)]
pub struct TurboshaftGraph {
    blocks: BTreeMap<BlockId, Block>,
    nodes: BTreeMap<NodeId, TurboshaftNode>,
    edges: Vec<Edge>,
}

impl TurboshaftGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty block
    pub fn add_block(&mut self, id: BlockId, kind: BlockKind) -> Result<&mut Block, GraphError> {
        if self.blocks.contains_key(&id) {
            warn!(block = %id, "duplicate block rejected");
            return Err(GraphError::DuplicateBlock(id));
        }
        debug!(block = %id, kind = %kind, "block added");
        Ok(self.blocks.entry(id).or_insert_with(|| Block::new(id, kind)))
    }

    /// Add a node to an existing block
    pub fn add_node(
        &mut self,
        id: NodeId,
        title: impl Into<String>,
        block: BlockId,
        op_properties_type: OpPropertiesType,
    ) -> Result<&mut TurboshaftNode, GraphError> {
        if self.nodes.contains_key(&id) {
            warn!(node = %id, "duplicate node rejected");
            return Err(GraphError::DuplicateNode(id));
        }
        let owner = self
            .blocks
            .get_mut(&block)
            .ok_or(GraphError::UnknownBlock(block))?;
        owner.add_node(id);

        let node = TurboshaftNode::new(id, title, block, op_properties_type);
        debug!(node = %id, title = node.op_title(), block = %block, "node added");
        Ok(self.nodes.entry(id).or_insert(node))
    }

    /// Connect `source` to `target`
    ///
    /// The edge is appended to the source's outputs and the target's inputs,
    /// which invalidates the target's cached display label.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> Result<Edge, GraphError> {
        for id in [source, target] {
            if !self.nodes.contains_key(&id) {
                warn!(source = %source, target = %target, "edge to unknown node rejected");
                return Err(GraphError::UnknownNode(id));
            }
        }

        let edge = Edge::new(source, target);
        if let Some(node) = self.nodes.get_mut(&source) {
            node.core_mut().push_output(edge)?;
        }
        if let Some(node) = self.nodes.get_mut(&target) {
            node.core_mut().push_input(edge)?;
        }
        self.edges.push(edge);
        debug!(source = %source, target = %target, "edge added");
        Ok(edge)
    }

    /// Look up a node
    pub fn node(&self, id: NodeId) -> Option<&TurboshaftNode> {
        self.nodes.get(&id)
    }

    /// Look up a node mutably
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut TurboshaftNode> {
        self.nodes.get_mut(&id)
    }

    /// Look up a block
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(&id)
    }

    /// Look up a block mutably
    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.get_mut(&id)
    }

    /// Nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = &TurboshaftNode> {
        self.nodes.values()
    }

    /// Nodes that pass the current visibility filter, in id order
    pub fn visible_nodes(&self) -> impl Iterator<Item = &TurboshaftNode> {
        self.nodes.values().filter(|n| n.is_visible())
    }

    /// Blocks in id order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Measure and cache the display label of every node
    ///
    /// Call once wiring is complete and before the first render.
    pub fn init_display_labels(&mut self, measure: &dyn TextMeasure) {
        for node in self.nodes.values_mut() {
            node.init_display_label(measure);
        }
        debug!(nodes = self.nodes.len(), "display labels initialised");
    }
}
