//! Pointer-gesture handling for the canvas.
//!
//! Three recognizers can be live at once (background pan + magnification,
//! and a per-glyph drag); each owns its state machine and writes a disjoint
//! piece of steady state at commit, so they cannot corrupt each other.
//!
//! ## Modules
//!
//! - `state` - gesture state machine enums and their query helpers
//! - `coords` - screen/model coordinate conversion
//! - `transform` - magnification and pan handlers, fit-to-content
//! - `drag` - glyph drag handler and group capture

pub mod coords;
mod drag;
pub mod state;
mod transform;

pub use state::{DragGesture, DragGroup, PanGesture, ZoomGesture, ZoomTarget};
