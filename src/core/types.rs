//! Identifier types for graph nodes and blocks
//!
//! Compiler dumps number nodes and blocks with small dense integers, so both
//! identifiers are `u32` newtypes. They double as non-owning handles into the
//! graph arena: holding one never keeps the referenced item alive.

use crate::core::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an operation node, unique within a graph
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

/// Identifier of a control-flow block, unique within a graph
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(u32);

impl NodeId {
    /// Create a node id from its dump number
    pub const fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Get the raw number
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl BlockId {
    /// Create a block id from its dump number
    pub const fn new(id: u32) -> Self {
        BlockId(id)
    }

    /// Get the raw number
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl From<u32> for BlockId {
    fn from(id: u32) -> Self {
        BlockId(id)
    }
}

/// Labels print the bare number
impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(NodeId)
            .map_err(|_| ParseError::InvalidId(s.to_string()))
    }
}

impl FromStr for BlockId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Dumps sometimes spell blocks as "B7"
        let digits = s.trim().trim_start_matches('B');
        digits
            .parse::<u32>()
            .map(BlockId)
            .map_err(|_| ParseError::InvalidId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_is_bare_number() {
        assert_eq!(NodeId::new(42).to_string(), "42");
        assert_eq!(BlockId::new(3).to_string(), "3");
    }

    #[test]
    fn test_id_parsing() {
        assert_eq!("17".parse::<NodeId>().unwrap(), NodeId::new(17));
        assert_eq!(" 8 ".parse::<NodeId>().unwrap(), NodeId::new(8));
        assert_eq!("B7".parse::<BlockId>().unwrap(), BlockId::new(7));
        assert_eq!("7".parse::<BlockId>().unwrap(), BlockId::new(7));

        assert_eq!(
            "-1".parse::<NodeId>(),
            Err(ParseError::InvalidId("-1".to_string()))
        );
        assert!("n4".parse::<NodeId>().is_err());
        assert!("B".parse::<BlockId>().is_err());
    }

    #[test]
    fn test_id_serde_transparent() {
        assert_eq!(serde_json::to_string(&NodeId::new(9)).unwrap(), "9");
        let id: BlockId = serde_json::from_str("5").unwrap();
        assert_eq!(id, BlockId::new(5));
    }
}
