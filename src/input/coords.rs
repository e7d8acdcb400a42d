//! Coordinate conversion between screen space and the glyph model grid.
//!
//! Conversions are pure functions over a [`ViewContext`], which carries the
//! *effective* pan/zoom (committed state with any live gesture folded in).
//! Screen space is f64 pixels; model space is the integer grid.

use kurbo::{Point, Vec2};

/// Effective view values for one conversion.
#[derive(Clone, Copy, Debug)]
pub struct ViewContext {
    /// Effective pan offset, model units
    pub pan: Vec2,
    /// Effective zoom scale, > 0
    pub zoom: f64,
    /// Container center in screen space; model origin maps here when pan = 0
    pub center: Point,
}

impl ViewContext {
    #[inline]
    pub fn new(pan: Vec2, zoom: f64, center: Point) -> Self {
        Self { pan, zoom, center }
    }

    /// Pan expressed in screen pixels.
    #[inline]
    fn screen_pan(&self) -> Vec2 {
        self.pan * self.zoom
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a model-grid point to its screen position.
    #[inline]
    pub fn model_to_screen(model: (i32, i32), ctx: &ViewContext) -> Point {
        let pan = ctx.screen_pan();
        Point::new(
            ctx.center.x + f64::from(model.0) * ctx.zoom + pan.x,
            ctx.center.y + f64::from(model.1) * ctx.zoom + pan.y,
        )
    }

    /// Convert a screen position to model-grid coordinates.
    ///
    /// The result is truncated toward zero, not rounded; drop placement
    /// depends on this exact truncation.
    #[inline]
    pub fn screen_to_model(screen: Point, ctx: &ViewContext) -> (i32, i32) {
        let pan = ctx.screen_pan();
        let x = (screen.x - pan.x - ctx.center.x) / ctx.zoom;
        let y = (screen.y - pan.y - ctx.center.y) / ctx.zoom;
        (x as i32, y as i32)
    }

    /// Convert a screen-space delta to model units (for pan/drag gestures).
    #[inline]
    pub fn delta_screen_to_model(delta: Vec2, zoom: f64) -> Vec2 {
        delta / zoom
    }
}
