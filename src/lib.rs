//! Turboshaft View - node model for inspecting compiler graphs
//!
//! Turboshaft View holds the per-node state an interactive IR viewer needs:
//! identity, operator title, block membership and side-effect
//! classification. From that it derives the inline label drawn on a node,
//! the tooltip title listing its edges, and the width and height the layout
//! engine reserves for it.
#![warn(missing_docs)]

// Core foundational modules
pub mod constants;
pub mod core;

// Main functional modules
pub mod graph;
pub mod measure;

// Re-export commonly used items for convenience
pub use crate::core::{BlockId, Config, Error, GraphError, NodeId, ParseError, Result};
pub use graph::{
    Block, BlockKind, DisplayLabel, Edge, GraphNode, NodeCore, OpPropertiesType, TurboshaftGraph,
    TurboshaftNode,
};
pub use measure::{BoundingBox, MonospaceMeasure, TextMeasure};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Load configuration and install logging
///
/// Returns the loaded configuration so the caller can build its measurer
/// from `config.measure`.
pub fn init() -> Result<Config> {
    let config = Config::load()?;
    crate::core::logging::init_logging(&config.logging);
    tracing::info!("Initializing {} v{}", NAME, VERSION);
    Ok(config)
}
