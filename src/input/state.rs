//! Gesture state machines - the live, uncommitted deltas of in-flight
//! gestures.
//!
//! Each recognizer is a small explicit state machine:
//!
//! ```text
//! Idle -> Active(cumulative value) -> Idle   (commit or cancel)
//! ```
//!
//! Update events carry a cumulative-since-start value and REPLACE the stored
//! one; nothing here sums increments, so a dropped update event can never
//! cause drift. The viewport-vs-selection branch of a magnification gesture
//! and the member set of a drag are both captured once at gesture start and
//! held fixed until the gesture ends.

use kurbo::Vec2;
use std::collections::HashSet;

/// What a magnification gesture acts on, decided once when it begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ZoomTarget {
    /// Selection was empty at gesture start: the gesture zooms the viewport.
    Viewport,
    /// Selection was non-empty: the gesture scales the captured glyphs.
    Selection(HashSet<u64>),
}

/// Live state of the magnification gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ZoomGesture {
    #[default]
    Idle,
    Active {
        target: ZoomTarget,
        /// Cumulative magnification factor since gesture start
        factor: f64,
    },
}

impl ZoomGesture {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Live multiplier on the viewport zoom: the gesture factor while the
    /// gesture targets the viewport, 1 otherwise.
    pub fn viewport_factor(&self) -> f64 {
        match self {
            Self::Active {
                target: ZoomTarget::Viewport,
                factor,
            } => *factor,
            _ => 1.0,
        }
    }

    /// Live multiplier a selected glyph previews: the raw gesture factor
    /// whenever a magnification gesture is active.
    pub fn glyph_factor(&self) -> f64 {
        match self {
            Self::Active { factor, .. } => *factor,
            Self::Idle => 1.0,
        }
    }
}

/// Live state of the background-pan gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PanGesture {
    #[default]
    Idle,
    Active {
        /// Zoom sampled once when the gesture began. Screen deltas divide by
        /// this, not by the current zoom, so a concurrently committing zoom
        /// gesture cannot feed back into an in-flight pan.
        start_zoom: f64,
        /// Cumulative screen-space translation since gesture start
        screen_translation: Vec2,
    },
}

impl PanGesture {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Live pan translation in model units; zero while idle.
    pub fn translation(&self) -> Vec2 {
        match self {
            Self::Active {
                start_zoom,
                screen_translation,
            } => *screen_translation / *start_zoom,
            Self::Idle => Vec2::ZERO,
        }
    }
}

/// The set of glyphs one drag gesture moves, fixed when the drag begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragGroup {
    /// Drag began on an unselected glyph: only that glyph moves
    Single(u64),
    /// Drag began on a selected glyph: the selection snapshot moves
    Group(HashSet<u64>),
}

impl DragGroup {
    pub fn contains(&self, id: u64) -> bool {
        match self {
            Self::Single(single) => *single == id,
            Self::Group(ids) => ids.contains(&id),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Group(ids) => ids.len(),
        }
    }

    /// Member ids, in no particular order.
    pub fn ids(&self) -> Vec<u64> {
        match self {
            Self::Single(id) => vec![*id],
            Self::Group(ids) => ids.iter().copied().collect(),
        }
    }
}

/// Live state of the glyph-drag gesture.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DragGesture {
    #[default]
    Idle,
    Active {
        group: DragGroup,
        /// Zoom sampled once when the drag began
        start_zoom: f64,
        /// Cumulative screen-space translation since gesture start
        screen_translation: Vec2,
    },
}

impl DragGesture {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub fn group(&self) -> Option<&DragGroup> {
        match self {
            Self::Active { group, .. } => Some(group),
            Self::Idle => None,
        }
    }

    /// Live drag translation in model units; zero while idle.
    pub fn translation(&self) -> Vec2 {
        match self {
            Self::Active {
                start_zoom,
                screen_translation,
                ..
            } => *screen_translation / *start_zoom,
            Self::Idle => Vec2::ZERO,
        }
    }

    /// Live translation applied to `id`: zero unless `id` is in the group.
    pub fn translation_for(&self, id: u64) -> Vec2 {
        match self.group() {
            Some(group) if group.contains(id) => self.translation(),
            _ => Vec2::ZERO,
        }
    }
}
