//! Global constants used throughout the viewer node model
//!
//! Compile-time constants shared by the geometry and configuration code so
//! that layout numbers are not scattered as magic values.

/// Horizontal space reserved for each input connection point (pixels).
///
/// A node is always at least `inputs * NODE_INPUT_WIDTH` wide so every
/// incoming edge gets its own slot along the top border.
pub const NODE_INPUT_WIDTH: f64 = 50.0;

/// Default advance width of one monospace column (pixels).
pub const DEFAULT_CHAR_WIDTH: f64 = 7.0;

/// Default height of one line of label text (pixels).
pub const DEFAULT_LINE_HEIGHT: f64 = 16.0;

/// Config file looked up by `Config::load`
pub const CONFIG_FILE_NAME: &str = "turboshaft-view.toml";

/// Prefix of environment variables that override configuration
pub const ENV_PREFIX: &str = "TSV_";
