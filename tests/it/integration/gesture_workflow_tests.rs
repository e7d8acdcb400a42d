//! Gesture workflow tests - full begin/update/end/cancel lifecycles across
//! viewport, selection, and board state.

use crate::helpers::{
    assert_glyph_position, canvas_with_n_glyphs, container, glyph_size, png_bytes,
    TestCanvasBuilder,
};
use glyphboard::{BackgroundSource, Board};
use kurbo::{Size, Vec2};
use std::collections::HashSet;

// ============================================================================
// Magnification gesture
// ============================================================================

#[test]
fn test_zoom_with_empty_selection_commits_to_the_viewport() {
    let mut canvas = canvas_with_n_glyphs(2);

    canvas.begin_zoom();
    canvas.update_zoom(1.5);
    assert_eq!(canvas.effective_zoom(), 1.5);
    assert_eq!(canvas.viewport().zoom, 1.0);

    canvas.end_zoom(2.0);
    assert_eq!(canvas.viewport().zoom, 2.0);
    assert_eq!(canvas.effective_zoom(), 2.0);
    // No glyph was scaled
    assert_eq!(glyph_size(&canvas, 1), 40);
    assert_eq!(glyph_size(&canvas, 2), 40);
}

#[test]
fn test_zoom_with_selection_scales_the_selected_glyphs() {
    let mut canvas = canvas_with_n_glyphs(3);
    canvas.toggle_selected(1);
    canvas.toggle_selected(2);

    canvas.begin_zoom();
    canvas.update_zoom(1.5);
    // Selected glyphs preview, the viewport does not
    assert_eq!(canvas.glyph_scale(1), 1.5);
    assert_eq!(canvas.glyph_scale(3), 1.0);
    assert_eq!(canvas.effective_zoom(), 1.0);

    canvas.end_zoom(2.0);
    assert_eq!(canvas.viewport().zoom, 1.0);
    assert_eq!(glyph_size(&canvas, 1), 80);
    assert_eq!(glyph_size(&canvas, 2), 80);
    assert_eq!(glyph_size(&canvas, 3), 40);
}

#[test]
fn test_zoom_target_frozen_at_start() {
    // Branch decided with a non-empty selection: mid-gesture toggles change
    // neither the branch nor the captured id set.
    let mut canvas = canvas_with_n_glyphs(3);
    canvas.toggle_selected(1);

    canvas.begin_zoom();
    canvas.toggle_selected(2);
    canvas.toggle_selected(1);
    canvas.end_zoom(2.0);

    assert_eq!(glyph_size(&canvas, 1), 80);
    assert_eq!(glyph_size(&canvas, 2), 40);
    assert_eq!(canvas.viewport().zoom, 1.0);
}

#[test]
fn test_zoom_branch_frozen_when_starting_empty() {
    let mut canvas = canvas_with_n_glyphs(2);

    canvas.begin_zoom();
    canvas.toggle_selected(1);
    canvas.end_zoom(2.0);

    // Still a viewport zoom; the mid-gesture selection gains nothing
    assert_eq!(canvas.viewport().zoom, 2.0);
    assert_eq!(glyph_size(&canvas, 1), 40);
}

#[test]
fn test_zoom_cancel_discards_the_live_factor() {
    let mut canvas = canvas_with_n_glyphs(1);

    canvas.begin_zoom();
    canvas.update_zoom(3.0);
    canvas.cancel_zoom();

    assert_eq!(canvas.viewport().zoom, 1.0);
    assert_eq!(canvas.effective_zoom(), 1.0);
    assert_eq!(glyph_size(&canvas, 1), 40);
    assert!(!canvas.zoom_gesture().is_active());
}

#[test]
fn test_non_positive_final_factor_is_discarded() {
    let mut canvas = canvas_with_n_glyphs(1);

    canvas.begin_zoom();
    canvas.end_zoom(0.0);

    assert_eq!(canvas.viewport().zoom, 1.0);
    assert!(!canvas.zoom_gesture().is_active());
}

#[test]
fn test_zoom_updates_replace_rather_than_accumulate() {
    let mut canvas = canvas_with_n_glyphs(1);

    canvas.begin_zoom();
    canvas.update_zoom(1.5);
    canvas.update_zoom(1.2);
    assert_eq!(canvas.effective_zoom(), 1.2);

    canvas.end_zoom(1.2);
    assert_eq!(canvas.viewport().zoom, 1.2);
}

// ============================================================================
// Pan gesture
// ============================================================================

#[test]
fn test_pan_commits_screen_delta_divided_by_zoom() {
    let mut canvas = TestCanvasBuilder::new().with_zoom(2.0).build();

    canvas.begin_pan();
    canvas.update_pan(Vec2::new(100.0, 50.0));
    assert_eq!(canvas.effective_pan(), Vec2::new(50.0, 25.0));
    assert_eq!(canvas.viewport().pan, Vec2::ZERO);

    canvas.end_pan(Vec2::new(100.0, 50.0));
    assert_eq!(canvas.viewport().pan, Vec2::new(50.0, 25.0));
    assert_eq!(canvas.effective_pan(), Vec2::new(50.0, 25.0));
}

#[test]
fn test_pan_updates_replace_rather_than_accumulate() {
    let mut canvas = TestCanvasBuilder::new().build();

    canvas.begin_pan();
    canvas.update_pan(Vec2::new(10.0, 0.0));
    canvas.update_pan(Vec2::new(25.0, 0.0));
    canvas.end_pan(Vec2::new(25.0, 0.0));

    assert_eq!(canvas.viewport().pan, Vec2::new(25.0, 0.0));
}

#[test]
fn test_pan_keeps_the_zoom_sampled_at_gesture_start() {
    let mut canvas = canvas_with_n_glyphs(0);

    // A magnification gesture is live when the pan starts...
    canvas.begin_zoom();
    canvas.update_zoom(2.0);
    canvas.begin_pan();

    // ...and commits mid-pan. The pan keeps dividing by the zoom it sampled.
    canvas.end_zoom(2.0);
    assert_eq!(canvas.viewport().zoom, 2.0);

    canvas.update_pan(Vec2::new(100.0, 0.0));
    assert_eq!(canvas.effective_pan(), Vec2::new(50.0, 0.0));

    canvas.end_pan(Vec2::new(100.0, 0.0));
    assert_eq!(canvas.viewport().pan, Vec2::new(50.0, 0.0));
}

#[test]
fn test_pan_cancel_leaves_the_committed_pan() {
    let mut canvas = TestCanvasBuilder::new().with_pan(7.0, 7.0).build();

    canvas.begin_pan();
    canvas.update_pan(Vec2::new(500.0, 500.0));
    canvas.cancel_pan();

    assert_eq!(canvas.viewport().pan, Vec2::new(7.0, 7.0));
    assert_eq!(canvas.effective_pan(), Vec2::new(7.0, 7.0));
}

// ============================================================================
// Drag gesture
// ============================================================================

#[test]
fn test_drag_on_selected_glyph_moves_the_whole_selection() {
    let mut canvas = canvas_with_n_glyphs(3);
    canvas.toggle_selected(1);
    canvas.toggle_selected(2);

    canvas.begin_drag(1);
    canvas.end_drag(Vec2::new(30.0, 40.0));

    assert_glyph_position(&canvas, 1, (30, 40));
    assert_glyph_position(&canvas, 2, (130, 40));
    assert_glyph_position(&canvas, 3, (200, 0));
}

#[test]
fn test_drag_on_unselected_glyph_moves_only_that_glyph() {
    let mut canvas = canvas_with_n_glyphs(3);
    canvas.toggle_selected(1);
    canvas.toggle_selected(2);

    canvas.begin_drag(3);
    canvas.end_drag(Vec2::new(30.0, 40.0));

    assert_glyph_position(&canvas, 1, (0, 0));
    assert_glyph_position(&canvas, 2, (100, 0));
    assert_glyph_position(&canvas, 3, (230, 40));
}

#[test]
fn test_drag_group_ignores_mid_gesture_selection_change() {
    let mut canvas = canvas_with_n_glyphs(2);
    canvas.toggle_selected(1);
    canvas.toggle_selected(2);

    canvas.begin_drag(1);
    canvas.toggle_selected(2); // deselect mid-gesture
    canvas.end_drag(Vec2::new(10.0, 0.0));

    // The snapshot captured at begin still moves glyph 2
    assert_glyph_position(&canvas, 1, (10, 0));
    assert_glyph_position(&canvas, 2, (110, 0));
    assert!(!canvas.is_selected(2));
}

#[test]
fn test_drag_divides_by_the_zoom_sampled_at_start() {
    let mut canvas = TestCanvasBuilder::new()
        .with_glyph('\u{1F600}', (0, 0), 40)
        .with_zoom(2.0)
        .build();

    canvas.begin_drag(1);
    canvas.end_drag(Vec2::new(100.0, 50.0));

    assert_glyph_position(&canvas, 1, (50, 25));
}

#[test]
fn test_drag_skips_glyphs_deleted_mid_gesture() {
    let mut canvas = canvas_with_n_glyphs(2);
    canvas.toggle_selected(1);
    canvas.toggle_selected(2);

    canvas.begin_drag(1);
    canvas.board_mut().delete_glyphs(&HashSet::from([2]));
    canvas.end_drag(Vec2::new(10.0, 0.0));

    assert_glyph_position(&canvas, 1, (10, 0));
    assert!(canvas.board().get_glyph(2).is_none());
}

#[test]
fn test_drag_cancel_moves_nothing() {
    let mut canvas = canvas_with_n_glyphs(1);

    canvas.begin_drag(1);
    canvas.update_drag(Vec2::new(100.0, 100.0));
    canvas.cancel_drag();

    assert_glyph_position(&canvas, 1, (0, 0));
    assert!(!canvas.drag_gesture().is_active());
}

// ============================================================================
// Concurrent recognizers and defensive no-ops
// ============================================================================

#[test]
fn test_concurrent_pan_and_drag_commit_independently() {
    let mut canvas = canvas_with_n_glyphs(2);

    canvas.begin_drag(1);
    canvas.begin_pan();
    canvas.update_drag(Vec2::new(10.0, 0.0));
    canvas.update_pan(Vec2::new(0.0, 20.0));

    canvas.end_drag(Vec2::new(10.0, 0.0));
    canvas.end_pan(Vec2::new(0.0, 20.0));

    assert_glyph_position(&canvas, 1, (10, 0));
    assert_glyph_position(&canvas, 2, (100, 0));
    assert_eq!(canvas.viewport().pan, Vec2::new(0.0, 20.0));
}

#[test]
fn test_events_without_an_active_gesture_are_noops() {
    let mut canvas = canvas_with_n_glyphs(1);

    canvas.update_zoom(5.0);
    canvas.end_zoom(5.0);
    canvas.update_pan(Vec2::new(50.0, 50.0));
    canvas.end_pan(Vec2::new(50.0, 50.0));
    canvas.update_drag(Vec2::new(50.0, 50.0));
    canvas.end_drag(Vec2::new(50.0, 50.0));
    canvas.cancel_zoom();
    canvas.cancel_pan();
    canvas.cancel_drag();

    assert_eq!(canvas.viewport().zoom, 1.0);
    assert_eq!(canvas.viewport().pan, Vec2::ZERO);
    assert_glyph_position(&canvas, 1, (0, 0));
}

// ============================================================================
// Fit-to-content
// ============================================================================

#[test]
fn test_fit_background_uses_the_loaded_image_size() {
    let mut canvas = TestCanvasBuilder::new().with_zoom(3.0).with_pan(10.0, 10.0).build();
    canvas
        .board_mut()
        .set_background(BackgroundSource::Bytes(png_bytes(200, 100)));

    assert!(canvas.fit_background(Size::new(400.0, 100.0)));
    assert_eq!(canvas.viewport().zoom, 1.0);
    assert_eq!(canvas.viewport().pan, Vec2::ZERO);
}

#[test]
fn test_fit_background_without_an_image_is_a_noop() {
    let mut canvas = TestCanvasBuilder::new().with_zoom(3.0).build();

    assert!(!canvas.fit_background(container()));
    assert_eq!(canvas.viewport().zoom, 3.0);
}
