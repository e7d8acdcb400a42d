//! Core types for the glyphboard canvas system.

use crate::constants::{DEFAULT_GLYPH_SIZE, SELECTION_BORDER_WIDTH};
use serde::{Deserialize, Serialize};

/// A single glyph placed on the canvas.
///
/// Positions and size live on the integer model grid, independent of screen
/// pixels and the current zoom. The board owns these; the engine only reads
/// them and requests mutations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    /// Unique identifier, assigned by the board
    pub id: u64,
    /// Model-space position (x, y)
    pub position: (i32, i32),
    /// Size scalar in model units
    pub size: i32,
    /// Pictographic character content
    pub content: char,
}

/// Where the background image came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundSource {
    /// Set by reference; the embedder fetches and delivers the bytes
    Url(String),
    /// Set by value
    Bytes(Vec<u8>),
}

/// Lifecycle state of the background image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchStatus {
    /// No background set
    #[default]
    Idle,
    /// A URL background is waiting for its bytes
    Fetching,
    /// Background decoded and ready to draw
    Loaded,
    /// Fetch or decode failed
    Failed,
}

/// Engine-side configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Model-unit size of a dropped glyph at zoom 1.0
    pub default_glyph_size: f64,
    /// Screen-space width of the selection highlight border
    pub selection_border_width: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            default_glyph_size: DEFAULT_GLYPH_SIZE,
            selection_border_width: SELECTION_BORDER_WIDTH,
        }
    }
}
