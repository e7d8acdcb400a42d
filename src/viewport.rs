//! Steady viewport state - the committed pan offset and zoom scale.
//!
//! Only gesture-end commits mutate this; live gesture previews are folded in
//! elsewhere at render time.

use crate::constants::DEFAULT_ZOOM;
use kurbo::{Size, Vec2};
use serde::{Deserialize, Serialize};

/// Committed pan/zoom state. `pan` is in model units; `zoom` is always > 0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    /// Pan offset in model units
    pub pan: Vec2,
    /// Zoom scale, strictly positive
    pub zoom: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset pan and pick the zoom that fits `content` inside `container`.
    ///
    /// Degenerate geometry (any dimension <= 0) leaves the viewport exactly
    /// as it was. Returns whether the viewport changed.
    pub fn fit_to_content(&mut self, content: Size, container: Size) -> bool {
        if content.width <= 0.0
            || content.height <= 0.0
            || container.width <= 0.0
            || container.height <= 0.0
        {
            return false;
        }
        let h_zoom = container.width / content.width;
        let v_zoom = container.height / content.height;
        self.pan = Vec2::ZERO;
        self.zoom = h_zoom.min(v_zoom);
        true
    }
}
