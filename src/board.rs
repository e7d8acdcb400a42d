//! Document seam - the `Board` trait and the in-memory reference board.
//!
//! The board owns glyphs and the background image; the engine reads them and
//! requests mutations at gesture commit. Unknown ids are always a silent
//! skip, never an error, so batch commits degrade per-item.

use crate::constants::{MAX_GLYPH_SIZE, MIN_GLYPH_SIZE};
use crate::error::BackgroundError;
use crate::types::{BackgroundSource, FetchStatus, Glyph};
use kurbo::{Size, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The document collaborator that owns glyph and background state.
///
/// How (and whether) implementations persist anything is the embedder's
/// concern; the engine never assumes more than what is declared here.
pub trait Board {
    /// Glyphs in stable iteration order.
    fn glyphs(&self) -> &[Glyph];

    fn get_glyph(&self, id: u64) -> Option<&Glyph>;

    /// Add a glyph and return its assigned id.
    fn add_glyph(&mut self, content: char, position: (i32, i32), size: i32) -> u64;

    /// Translate a glyph's stored position by `delta`, with each component
    /// truncated toward zero to the integer grid. Unknown id: no-op.
    fn move_glyph(&mut self, id: u64, delta: Vec2);

    /// Multiply a glyph's stored size by `factor`, subject to the board's
    /// clamp policy. Unknown id: no-op.
    fn scale_glyph(&mut self, id: u64, factor: f64);

    /// Remove every listed glyph; ids not present are skipped.
    fn delete_glyphs(&mut self, ids: &HashSet<u64>);

    /// Replace the background. A `Url` source waits for its bytes
    /// (`Fetching`); a `Bytes` source decodes immediately.
    fn set_background(&mut self, source: BackgroundSource);

    fn background_status(&self) -> FetchStatus;

    /// Pixel dimensions of the loaded background, if any.
    fn background_size(&self) -> Option<Size>;
}

/// In-memory reference board.
///
/// Glyph ids are assigned from a monotonically increasing counter, so
/// iteration order is insertion order and ids are never reused. The whole
/// state serializes so embedders can persist it wholesale.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryBoard {
    glyphs: Vec<Glyph>,
    next_id: u64,
    background: Option<BackgroundSource>,
    background_status: FetchStatus,
    background_size: Option<Size>,
}

impl MemoryBoard {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    fn glyph_mut(&mut self, id: u64) -> Option<&mut Glyph> {
        self.glyphs.iter_mut().find(|g| g.id == id)
    }

    /// Deliver the outcome of an external fetch for a `Url` background.
    ///
    /// Ignored unless a fetch is actually pending; a stale delivery after
    /// the background was replaced or cleared must not clobber it.
    pub fn resolve_background(&mut self, result: Result<Vec<u8>, BackgroundError>) {
        if self.background_status != FetchStatus::Fetching {
            tracing::debug!("ignoring background delivery with no fetch pending");
            return;
        }
        match result {
            Ok(bytes) => self.load_background_bytes(&bytes),
            Err(err) => {
                tracing::warn!(error = %err, "background fetch failed");
                self.background_status = FetchStatus::Failed;
                self.background_size = None;
            }
        }
    }

    /// Drop the background entirely.
    pub fn clear_background(&mut self) {
        self.background = None;
        self.background_status = FetchStatus::Idle;
        self.background_size = None;
    }

    fn load_background_bytes(&mut self, bytes: &[u8]) {
        match decode_dimensions(bytes) {
            Ok((width, height)) => {
                self.background_status = FetchStatus::Loaded;
                self.background_size = Some(Size::new(f64::from(width), f64::from(height)));
                tracing::debug!(width, height, "background loaded");
            }
            Err(err) => {
                tracing::warn!(error = %err, "background decode failed");
                self.background_status = FetchStatus::Failed;
                self.background_size = None;
            }
        }
    }
}

fn decode_dimensions(bytes: &[u8]) -> Result<(u32, u32), BackgroundError> {
    use image::GenericImageView;
    let img = image::load_from_memory(bytes)?;
    Ok(img.dimensions())
}

impl Board for MemoryBoard {
    fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    fn get_glyph(&self, id: u64) -> Option<&Glyph> {
        self.glyphs.iter().find(|g| g.id == id)
    }

    fn add_glyph(&mut self, content: char, position: (i32, i32), size: i32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.glyphs.push(Glyph {
            id,
            position,
            size,
            content,
        });
        id
    }

    fn move_glyph(&mut self, id: u64, delta: Vec2) {
        match self.glyph_mut(id) {
            Some(glyph) => {
                glyph.position.0 += delta.x as i32;
                glyph.position.1 += delta.y as i32;
            }
            None => tracing::warn!(id, "move requested for unknown glyph"),
        }
    }

    fn scale_glyph(&mut self, id: u64, factor: f64) {
        if factor <= 0.0 {
            tracing::warn!(id, factor, "ignoring non-positive scale factor");
            return;
        }
        match self.glyph_mut(id) {
            Some(glyph) => {
                let scaled = (f64::from(glyph.size) * factor).round() as i32;
                glyph.size = scaled.clamp(MIN_GLYPH_SIZE, MAX_GLYPH_SIZE);
            }
            None => tracing::warn!(id, "scale requested for unknown glyph"),
        }
    }

    fn delete_glyphs(&mut self, ids: &HashSet<u64>) {
        self.glyphs.retain(|g| !ids.contains(&g.id));
    }

    fn set_background(&mut self, source: BackgroundSource) {
        match &source {
            BackgroundSource::Url(url) => {
                tracing::debug!(url = %url, "background set by reference; awaiting bytes");
                self.background_status = FetchStatus::Fetching;
                self.background_size = None;
            }
            BackgroundSource::Bytes(bytes) => {
                self.load_background_bytes(bytes);
            }
        }
        self.background = Some(source);
    }

    fn background_status(&self) -> FetchStatus {
        self.background_status
    }

    fn background_size(&self) -> Option<Size> {
        self.background_size
    }
}
