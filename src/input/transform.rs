//! Viewport transformations - the magnification and background-pan gestures,
//! plus double-tap fit-to-content.
//!
//! Every update replaces the live cumulative value; only the end event
//! commits, and only into whichever piece of steady state the gesture
//! targeted. Cancelling discards the live value with no commit.

use crate::board::Board;
use crate::canvas::Canvas;
use crate::input::coords::CoordinateConverter;
use crate::input::state::{PanGesture, ZoomGesture, ZoomTarget};
use kurbo::{Size, Vec2};
use tracing::{debug, warn};

impl<B: Board> Canvas<B> {
    /// Begin a magnification gesture.
    ///
    /// The viewport-vs-selection branch is decided here, once: an empty
    /// selection means the gesture zooms the viewport, a non-empty one means
    /// it scales a snapshot of the selection. Later selection changes do not
    /// retarget the gesture.
    pub fn begin_zoom(&mut self) {
        if self.zoom_gesture.is_active() {
            warn!("zoom gesture began while one was active; restarting");
        }
        let target = if self.selection.is_empty() {
            ZoomTarget::Viewport
        } else {
            ZoomTarget::Selection(self.selection.snapshot())
        };
        self.zoom_gesture = ZoomGesture::Active {
            target,
            factor: 1.0,
        };
    }

    /// Replace the live magnification factor (cumulative since start).
    pub fn update_zoom(&mut self, factor: f64) {
        match &mut self.zoom_gesture {
            ZoomGesture::Active { factor: live, .. } => *live = factor,
            ZoomGesture::Idle => debug!("ignoring zoom update with no active gesture"),
        }
    }

    /// End the magnification gesture and commit `final_factor`.
    ///
    /// Viewport target: multiplies the steady zoom (a non-positive factor is
    /// discarded; the steady zoom stays strictly positive). Selection
    /// target: scales every glyph captured at gesture start; the steady zoom
    /// is untouched.
    pub fn end_zoom(&mut self, final_factor: f64) {
        match std::mem::take(&mut self.zoom_gesture) {
            ZoomGesture::Idle => debug!("ignoring zoom end with no active gesture"),
            ZoomGesture::Active {
                target: ZoomTarget::Viewport,
                ..
            } => {
                if final_factor > 0.0 {
                    self.viewport.zoom *= final_factor;
                    debug!(zoom = self.viewport.zoom, "viewport zoom committed");
                } else {
                    warn!(final_factor, "discarding non-positive zoom factor");
                }
            }
            ZoomGesture::Active {
                target: ZoomTarget::Selection(ids),
                ..
            } => {
                let count = ids.len();
                for id in ids {
                    self.board.scale_glyph(id, final_factor);
                }
                debug!(count, factor = final_factor, "selection scale committed");
            }
        }
    }

    /// Discard the magnification gesture without committing.
    pub fn cancel_zoom(&mut self) {
        self.zoom_gesture = ZoomGesture::Idle;
    }

    /// Begin a background-pan gesture, sampling the zoom it will divide by.
    pub fn begin_pan(&mut self) {
        if self.pan_gesture.is_active() {
            warn!("pan gesture began while one was active; restarting");
        }
        self.pan_gesture = PanGesture::Active {
            start_zoom: self.effective_zoom(),
            screen_translation: Vec2::ZERO,
        };
    }

    /// Replace the live screen-space pan translation (cumulative since
    /// start).
    pub fn update_pan(&mut self, screen_translation: Vec2) {
        match &mut self.pan_gesture {
            PanGesture::Active {
                screen_translation: live,
                ..
            } => *live = screen_translation,
            PanGesture::Idle => debug!("ignoring pan update with no active gesture"),
        }
    }

    /// End the pan gesture and commit the final translation into the steady
    /// pan, converted with the zoom sampled at gesture start.
    pub fn end_pan(&mut self, final_screen_translation: Vec2) {
        match std::mem::take(&mut self.pan_gesture) {
            PanGesture::Idle => debug!("ignoring pan end with no active gesture"),
            PanGesture::Active { start_zoom, .. } => {
                self.viewport.pan +=
                    CoordinateConverter::delta_screen_to_model(final_screen_translation, start_zoom);
                debug!(
                    pan_x = self.viewport.pan.x,
                    pan_y = self.viewport.pan.y,
                    "pan committed"
                );
            }
        }
    }

    /// Discard the pan gesture without committing.
    pub fn cancel_pan(&mut self) {
        self.pan_gesture = PanGesture::Idle;
    }

    /// Reset the pan and fit `content` into `container` (double-tap).
    /// Degenerate geometry is a no-op. Returns whether the viewport changed.
    pub fn fit_to_content(&mut self, content: Size, container: Size) -> bool {
        let changed = self.viewport.fit_to_content(content, container);
        if changed {
            debug!(zoom = self.viewport.zoom, "fit to content");
        }
        changed
    }

    /// Fit the loaded background image into `container`. No-op when no
    /// background is loaded.
    pub fn fit_background(&mut self, container: Size) -> bool {
        match self.board.background_size() {
            Some(content) => self.fit_to_content(content, container),
            None => false,
        }
    }
}
