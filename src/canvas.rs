//! The engine façade - steady state plus the three gesture recognizers.

use crate::board::Board;
use crate::input::coords::ViewContext;
use crate::input::state::{DragGesture, PanGesture, ZoomGesture};
use crate::selection::SelectionManager;
use crate::types::CanvasConfig;
use crate::viewport::ViewportState;
use kurbo::{Point, Vec2};

/// One interactive canvas over a board.
///
/// Owns the committed viewport, the selection, and the live state of the
/// three gesture recognizers. All gesture entry points live in
/// [`crate::input`]; rendering output in [`crate::render`].
pub struct Canvas<B: Board> {
    pub(crate) board: B,
    pub(crate) viewport: ViewportState,
    pub(crate) selection: SelectionManager,
    pub(crate) zoom_gesture: ZoomGesture,
    pub(crate) pan_gesture: PanGesture,
    pub(crate) drag_gesture: DragGesture,
    config: CanvasConfig,
}

impl<B: Board> Canvas<B> {
    pub fn new(board: B) -> Self {
        Self::with_config(board, CanvasConfig::default())
    }

    pub fn with_config(board: B, config: CanvasConfig) -> Self {
        Self {
            board,
            viewport: ViewportState::new(),
            selection: SelectionManager::new(),
            zoom_gesture: ZoomGesture::Idle,
            pan_gesture: PanGesture::Idle,
            drag_gesture: DragGesture::Idle,
            config,
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    /// Direct board access for embedder-side document edits.
    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Replace the committed viewport wholesale, e.g. when restoring a
    /// persisted session.
    pub fn set_viewport(&mut self, viewport: ViewportState) {
        self.viewport = viewport;
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn zoom_gesture(&self) -> &ZoomGesture {
        &self.zoom_gesture
    }

    pub fn pan_gesture(&self) -> &PanGesture {
        &self.pan_gesture
    }

    pub fn drag_gesture(&self) -> &DragGesture {
        &self.drag_gesture
    }

    // ------------------------------------------------------------------
    // Effective (steady + live) view values
    // ------------------------------------------------------------------

    /// Committed zoom with any live viewport-zoom preview folded in.
    ///
    /// A magnification gesture targeting the selection never shows up here;
    /// its factor previews on the selected glyphs instead.
    pub fn effective_zoom(&self) -> f64 {
        self.viewport.zoom * self.zoom_gesture.viewport_factor()
    }

    /// Committed pan with any live pan translation folded in, model units.
    pub fn effective_pan(&self) -> Vec2 {
        self.viewport.pan + self.pan_gesture.translation()
    }

    /// Render scale for one glyph.
    ///
    /// A selected glyph previews the live magnification factor on top of the
    /// steady zoom. An unselected glyph follows the viewport zoom, which
    /// itself previews the factor only while the selection is empty - it
    /// never previews a batch-scale aimed at other glyphs.
    pub fn glyph_scale(&self, id: u64) -> f64 {
        if self.selection.is_selected(id) {
            self.viewport.zoom * self.zoom_gesture.glyph_factor()
        } else {
            self.effective_zoom()
        }
    }

    /// Conversion context for a container whose center is `center`.
    pub fn view_context(&self, center: Point) -> ViewContext {
        ViewContext::new(self.effective_pan(), self.effective_zoom(), center)
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Toggle glyph `id` in the selection (tap on a glyph).
    pub fn toggle_selected(&mut self, id: u64) {
        self.selection.toggle(id);
    }

    /// Clear the selection (tap on the background).
    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.is_selected(id)
    }

    /// Delete every selected glyph from the board and clear the selection.
    /// No-op when nothing is selected.
    pub fn delete_selection(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let ids = self.selection.snapshot();
        tracing::debug!(count = ids.len(), "deleting selection");
        self.board.delete_glyphs(&ids);
        self.selection.clear();
    }
}
