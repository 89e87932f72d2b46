//! Core system types and foundations
//!
//! Identifier types, error handling, configuration and logging shared by
//! the measurement and graph modules.

pub mod types;
pub mod error;
pub mod config;
pub mod logging;

// Re-export commonly used items
pub use types::{BlockId, NodeId};
pub use error::{Error, GraphError, ParseError, Result};
pub use config::{Config, LoggingConfig, MeasureConfig};
