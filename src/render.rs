//! Frame assembly - combining steady and live state into a drawable
//! snapshot.
//!
//! The frame is a pure function of the canvas: committed viewport and glyph
//! state with live gesture previews folded in. Nothing here mutates
//! anything, so commit semantics stay testable without a renderer.

use crate::board::Board;
use crate::canvas::Canvas;
use crate::input::coords::CoordinateConverter;
use crate::types::FetchStatus;
use kurbo::{Point, Size};

/// One glyph ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphSprite {
    pub id: u64,
    pub content: char,
    /// Center position in screen space, live drag preview included
    pub position: Point,
    /// Render scale; screen size = stored size x this
    pub scale: f64,
    /// Whether to draw the selection border
    pub selected: bool,
    /// Border width in the glyph's pre-scale space, compensated so the
    /// highlight keeps constant screen thickness; 0 when unselected
    pub border_width: f64,
}

/// Background placement for the frame.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundSprite {
    /// Screen position of the model origin
    pub position: Point,
    /// Scale to draw the background image at
    pub scale: f64,
    /// Lifecycle state, so the chrome can show a spinner while `Fetching`
    pub status: FetchStatus,
}

/// A full drawable snapshot of the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub background: BackgroundSprite,
    pub glyphs: Vec<GlyphSprite>,
}

impl<B: Board> Canvas<B> {
    /// Produce the frame for a container of the given size.
    pub fn frame(&self, container: Size) -> Frame {
        let center = Point::new(container.width / 2.0, container.height / 2.0);
        let ctx = self.view_context(center);

        let background = BackgroundSprite {
            position: CoordinateConverter::model_to_screen((0, 0), &ctx),
            scale: self.effective_zoom(),
            status: self.board.background_status(),
        };

        let glyphs = self
            .board
            .glyphs()
            .iter()
            .map(|glyph| {
                // Live drag preview shifts the model position by the
                // truncated translation, matching what a commit would store.
                let live = self.drag_gesture.translation_for(glyph.id);
                let position = (
                    glyph.position.0 + live.x as i32,
                    glyph.position.1 + live.y as i32,
                );

                let scale = self.glyph_scale(glyph.id);
                let selected = self.selection.is_selected(glyph.id);
                let border_width = if selected {
                    self.config().selection_border_width / scale
                } else {
                    0.0
                };

                GlyphSprite {
                    id: glyph.id,
                    content: glyph.content,
                    position: CoordinateConverter::model_to_screen(position, &ctx),
                    scale,
                    selected,
                    border_width,
                }
            })
            .collect::<Vec<_>>();

        tracing::trace!(glyphs = glyphs.len(), "frame assembled");
        Frame { background, glyphs }
    }
}
