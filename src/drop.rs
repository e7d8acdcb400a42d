//! Drop-target handling - typed payloads tried in a fixed order.
//!
//! Payload type negotiation happens upstream; the canvas receives the
//! representations a drop offered and tries them by kind: a URL sets the
//! background by reference, raw image bytes set it by value, and a single
//! pictographic character becomes a new glyph at the drop location.

use crate::board::Board;
use crate::canvas::Canvas;
use crate::input::coords::CoordinateConverter;
use crate::types::BackgroundSource;
use kurbo::{Point, Size};
use tracing::debug;

/// One representation of a dropped payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropPayload {
    Url(String),
    ImageBytes(Vec<u8>),
    Text(String),
}

/// Whether the canvas consumed a drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Handled,
    /// No payload kind matched; the caller may offer the drop elsewhere
    Unhandled,
}

impl<B: Board> Canvas<B> {
    /// Offer a drop at `location` (screen space, inside a container of the
    /// given size).
    ///
    /// Kinds are tried in order - URL, then image bytes, then a pictographic
    /// character - and the first match wins. A dropped glyph lands on the
    /// model point under the cursor, sized by the default glyph size divided
    /// by the current zoom so it appears at a constant screen size.
    pub fn handle_drop(
        &mut self,
        payloads: &[DropPayload],
        location: Point,
        container: Size,
    ) -> DropOutcome {
        for payload in payloads {
            if let DropPayload::Url(url) = payload {
                debug!(url = %url, "drop: background by reference");
                self.board.set_background(BackgroundSource::Url(url.clone()));
                return DropOutcome::Handled;
            }
        }

        for payload in payloads {
            if let DropPayload::ImageBytes(bytes) = payload {
                debug!(len = bytes.len(), "drop: background by value");
                self.board
                    .set_background(BackgroundSource::Bytes(bytes.clone()));
                return DropOutcome::Handled;
            }
        }

        for payload in payloads {
            if let DropPayload::Text(text) = payload {
                let Some(first) = text.chars().next() else {
                    continue;
                };
                if !is_pictograph(first) {
                    continue;
                }
                let center = Point::new(container.width / 2.0, container.height / 2.0);
                let ctx = self.view_context(center);
                let position = CoordinateConverter::screen_to_model(location, &ctx);
                let size = (self.config().default_glyph_size / self.effective_zoom()) as i32;
                let id = self.board.add_glyph(first, position, size);
                debug!(id, ?position, size, "drop: glyph added");
                return DropOutcome::Handled;
            }
        }

        DropOutcome::Unhandled
    }
}

/// Whether `c` belongs to the pictographic blocks the canvas accepts as
/// glyph content.
pub fn is_pictograph(c: char) -> bool {
    matches!(
        u32::from(c),
        0x231A..=0x23FA          // watches, media controls
        | 0x2600..=0x27BF        // misc symbols, dingbats
        | 0x2B00..=0x2BFF        // stars, arrows
        | 0x1F300..=0x1F5FF      // symbols and pictographs
        | 0x1F600..=0x1F64F      // emoticons
        | 0x1F680..=0x1F6FF      // transport and map
        | 0x1F900..=0x1F9FF      // supplemental symbols
        | 0x1FA70..=0x1FAFF      // symbols extended-A
    )
}
