//! Glyph-drag gesture - group capture, live preview translation, commit.

use crate::board::Board;
use crate::canvas::Canvas;
use crate::input::coords::CoordinateConverter;
use crate::input::state::{DragGesture, DragGroup};
use kurbo::Vec2;
use tracing::{debug, warn};

impl<B: Board> Canvas<B> {
    /// Begin dragging glyph `id`.
    ///
    /// Group resolution happens here, once: a drag starting on a selected
    /// glyph captures a snapshot of the whole selection; one starting on an
    /// unselected glyph moves only that glyph. The captured group does not
    /// change if the selection is mutated before the gesture ends.
    pub fn begin_drag(&mut self, id: u64) {
        if self.drag_gesture.is_active() {
            warn!("drag gesture began while one was active; restarting");
        }
        let group = if self.selection.is_selected(id) {
            DragGroup::Group(self.selection.snapshot())
        } else {
            DragGroup::Single(id)
        };
        self.drag_gesture = DragGesture::Active {
            group,
            start_zoom: self.effective_zoom(),
            screen_translation: Vec2::ZERO,
        };
    }

    /// Replace the live screen-space drag translation (cumulative since
    /// start).
    pub fn update_drag(&mut self, screen_translation: Vec2) {
        match &mut self.drag_gesture {
            DragGesture::Active {
                screen_translation: live,
                ..
            } => *live = screen_translation,
            DragGesture::Idle => debug!("ignoring drag update with no active gesture"),
        }
    }

    /// End the drag and move every glyph in the captured group by the final
    /// translation, converted with the zoom sampled at gesture start. Ids
    /// deleted mid-gesture are skipped by the board, not errors.
    pub fn end_drag(&mut self, final_screen_translation: Vec2) {
        match std::mem::take(&mut self.drag_gesture) {
            DragGesture::Idle => debug!("ignoring drag end with no active gesture"),
            DragGesture::Active {
                group, start_zoom, ..
            } => {
                let translation =
                    CoordinateConverter::delta_screen_to_model(final_screen_translation, start_zoom);
                let count = group.len();
                for id in group.ids() {
                    self.board.move_glyph(id, translation);
                }
                debug!(
                    count,
                    dx = translation.x,
                    dy = translation.y,
                    "drag committed"
                );
            }
        }
    }

    /// Discard the drag without committing.
    pub fn cancel_drag(&mut self) {
        self.drag_gesture = DragGesture::Idle;
    }
}
