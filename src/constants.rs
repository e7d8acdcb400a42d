//! Engine-wide constants.
//!
//! Centralizes magic numbers so the defaults are visible in one place.

// ============================================================================
// Glyph Defaults
// ============================================================================

/// Default size for a dropped glyph, in model units at zoom 1.0.
/// The actual stored size is this divided by the zoom at drop time.
pub const DEFAULT_GLYPH_SIZE: f64 = 40.0;

/// Minimum glyph size the memory board will clamp a scale commit to
pub const MIN_GLYPH_SIZE: i32 = 8;

/// Maximum glyph size the memory board will clamp a scale commit to
pub const MAX_GLYPH_SIZE: i32 = 400;

// ============================================================================
// Viewport
// ============================================================================

/// Default zoom level
pub const DEFAULT_ZOOM: f64 = 1.0;

// ============================================================================
// Selection Highlight
// ============================================================================

/// Screen-space width of the selected-glyph border at any zoom.
/// The render surface divides this by the glyph's render scale so the
/// highlight keeps constant thickness while a scale preview is live.
pub const SELECTION_BORDER_WIDTH: f64 = 3.0;
