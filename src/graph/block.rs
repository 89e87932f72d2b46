//! Control-flow blocks

use crate::core::error::ParseError;
use crate::core::types::{BlockId, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of control-flow block
///
/// Dumps spell kinds in upper case (`"LOOP"`); labels use the display name
/// (`"Loop"`). Parsing accepts both, serde writes the dump spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    /// Join point of several predecessors
    #[serde(rename = "MERGE", alias = "Merge")]
    Merge,
    /// Loop header
    #[serde(rename = "LOOP", alias = "Loop")]
    Loop,
    /// Straight-line block
    #[serde(rename = "BLOCK", alias = "Block")]
    Block,
}

impl BlockKind {
    /// All members in declaration order
    pub const ALL: [BlockKind; 3] = [BlockKind::Merge, BlockKind::Loop, BlockKind::Block];

    /// Display name used in block labels
    pub const fn as_str(self) -> &'static str {
        match self {
            BlockKind::Merge => "Merge",
            BlockKind::Loop => "Loop",
            BlockKind::Block => "Block",
        }
    }

    /// Spelling used by compiler dumps
    pub const fn dump_token(self) -> &'static str {
        match self {
            BlockKind::Merge => "MERGE",
            BlockKind::Loop => "LOOP",
            BlockKind::Block => "BLOCK",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.dump_token() == s || kind.as_str() == s)
            .ok_or_else(|| ParseError::UnknownBlockKind(s.to_string()))
    }
}

/// A control-flow block and the nodes scheduled in it
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    id: BlockId,
    kind: BlockKind,
    deferred: bool,
    predecessors: Vec<BlockId>,
    nodes: Vec<NodeId>,
}

impl Block {
    /// Create an empty, non-deferred block
    pub fn new(id: BlockId, kind: BlockKind) -> Self {
        Self {
            id,
            kind,
            deferred: false,
            predecessors: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Block identifier
    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Block kind
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Whether the block is on a cold path
    pub fn is_deferred(&self) -> bool {
        self.deferred
    }

    /// Mark the block as deferred or not
    pub fn set_deferred(&mut self, deferred: bool) {
        self.deferred = deferred;
    }

    /// Predecessor blocks in dump order
    pub fn predecessors(&self) -> &[BlockId] {
        &self.predecessors
    }

    /// Record a predecessor block
    pub fn add_predecessor(&mut self, pred: BlockId) {
        self.predecessors.push(pred);
    }

    /// Nodes in this block in insertion order
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Record a node as scheduled in this block
    pub fn add_node(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    /// Header text, e.g. `"Loop 3 (deferred)"`
    pub fn label(&self) -> String {
        if self.deferred {
            format!("{} {} (deferred)", self.kind, self.id)
        } else {
            format!("{} {}", self.kind, self.id)
        }
    }
}
