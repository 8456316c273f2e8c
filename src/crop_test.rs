#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::CROP_EDGE_THRESHOLD_PX;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn in_unit(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

fn render() -> Size {
    Size::new(200.0, 100.0)
}

// =============================================================
// Clamping
// =============================================================

#[test]
fn clamp_overlapping_pair() {
    let c = CropInsets::new(0.9, 0.0, 0.3, 0.0).clamped(MIN_VISIBLE_CROP);
    assert!(c.left + c.right < 1.0);
    assert!(in_unit(c.left) && in_unit(c.right));
    assert_eq!(c.left, 0.9);
    assert!(approx_eq(c.right, 0.09));
}

#[test]
fn clamp_out_of_range_values() {
    let c = CropInsets::new(-0.5, 1.5, 0.2, f64::NAN).clamped(MIN_VISIBLE_CROP);
    assert_eq!(c.left, 0.0);
    assert_eq!(c.right, 0.2);
    assert!(approx_eq(c.top, 1.0 - MIN_VISIBLE_CROP));
    assert_eq!(c.bottom, 0.0);
    assert!(c.top + c.bottom < 1.0);
}

#[test]
fn clamp_full_pair_leaves_sliver() {
    let c = CropInsets::new(1.0, 1.0, 1.0, 1.0).clamped(MIN_VISIBLE_CROP);
    assert!(c.visible_width_fraction() >= MIN_VISIBLE_CROP - EPSILON);
    assert!(c.visible_height_fraction() >= MIN_VISIBLE_CROP - EPSILON);
}

#[test]
fn clamp_leaves_valid_insets_alone() {
    let c = CropInsets::new(0.1, 0.2, 0.3, 0.4);
    assert_eq!(c.clamped(MIN_VISIBLE_CROP), c);
}

#[test]
fn clamp_invalid_min_visible_uses_default() {
    let c = CropInsets::new(1.0, 0.0, 0.0, 0.0).clamped(0.0);
    assert!(approx_eq(c.left, 1.0 - MIN_VISIBLE_CROP));
}

#[test]
fn clamp_favoring_moved_edge_gives_way() {
    let c = CropInsets::new(0.9, 0.0, 0.3, 0.0).clamped_favoring(CropEdge::Left, MIN_VISIBLE_CROP);
    assert_eq!(c.right, 0.3);
    assert!(approx_eq(c.left, 0.69));
    assert!(c.left + c.right < 1.0);
}

#[test]
fn clamp_favoring_also_clamps_other_axis() {
    let c = CropInsets::new(0.0, 0.8, 0.0, 0.8).clamped_favoring(CropEdge::Left, MIN_VISIBLE_CROP);
    assert!(c.top + c.bottom < 1.0);
}

// =============================================================
// Accessors and rects
// =============================================================

#[test]
fn get_and_with_round_trip_each_edge() {
    for edge in CropEdge::ALL {
        let c = CropInsets::NONE.with(edge, 0.25);
        assert_eq!(c.get(edge), 0.25);
        assert_eq!(c.get(edge.opposite()), 0.0);
    }
}

#[test]
fn identity_detection() {
    assert!(CropInsets::NONE.is_identity());
    assert!(CropInsets::default().is_identity());
    assert!(!CropInsets::new(0.0, 0.0, 0.01, 0.0).is_identity());
}

#[test]
fn visible_rect_inside_content() {
    let c = CropInsets::new(0.1, 0.2, 0.3, 0.4);
    let r = c.visible_rect(Rect::from_xywh(100.0, 100.0, 200.0, 100.0));
    assert!(approx_eq(r.min_x(), 120.0));
    assert!(approx_eq(r.min_y(), 120.0));
    assert!(approx_eq(r.width(), 120.0));
    assert!(approx_eq(r.height(), 40.0));
}

#[test]
fn source_rect_in_pixels() {
    let c = CropInsets::new(0.25, 0.0, 0.25, 0.5);
    let r = c.source_rect(Size::new(400.0, 300.0));
    assert_eq!(r, Rect::from_xywh(100.0, 0.0, 200.0, 150.0));
}

// =============================================================
// Edge picking
// =============================================================

#[test]
fn picks_left_edge_near_pointer() {
    let edge = pick_edge(Point::new(5.0, 50.0), render(), CropInsets::NONE, CROP_EDGE_THRESHOLD_PX);
    assert_eq!(edge, Some(CropEdge::Left));
}

#[test]
fn picks_each_edge() {
    let t = CROP_EDGE_THRESHOLD_PX;
    assert_eq!(pick_edge(Point::new(100.0, 3.0), render(), CropInsets::NONE, t), Some(CropEdge::Top));
    assert_eq!(pick_edge(Point::new(190.0, 50.0), render(), CropInsets::NONE, t), Some(CropEdge::Right));
    assert_eq!(pick_edge(Point::new(100.0, 99.0), render(), CropInsets::NONE, t), Some(CropEdge::Bottom));
}

#[test]
fn picks_edge_of_cropped_rect() {
    // Left inset 0.5 puts the left crop edge at x = 100.
    let insets = CropInsets::new(0.5, 0.0, 0.0, 0.0);
    assert_eq!(pick_edge(Point::new(110.0, 50.0), render(), insets, 18.0), Some(CropEdge::Left));
    assert_eq!(pick_edge(Point::new(10.0, 50.0), render(), insets, 18.0), None);
}

#[test]
fn nothing_within_threshold_is_none() {
    assert_eq!(pick_edge(Point::new(100.0, 50.0), render(), CropInsets::NONE, 18.0), None);
}

#[test]
fn exactly_at_threshold_is_picked() {
    assert_eq!(pick_edge(Point::new(18.0, 50.0), render(), CropInsets::NONE, 18.0), Some(CropEdge::Left));
}

#[test]
fn corner_tie_prefers_left() {
    assert_eq!(pick_edge(Point::new(0.0, 0.0), render(), CropInsets::NONE, 18.0), Some(CropEdge::Left));
}

#[test]
fn nearer_edge_wins() {
    assert_eq!(pick_edge(Point::new(10.0, 4.0), render(), CropInsets::NONE, 18.0), Some(CropEdge::Top));
}

#[test]
fn far_outside_along_edge_is_not_picked() {
    // On the left edge's line but well above the rect.
    assert_eq!(pick_edge(Point::new(0.0, -40.0), render(), CropInsets::NONE, 18.0), None);
}

// =============================================================
// Dragging
// =============================================================

#[test]
fn drag_left_edge_right_increases_left() {
    let c = drag_edge(CropInsets::NONE, CropEdge::Left, Vec2::new(50.0, 30.0), render(), MIN_VISIBLE_CROP);
    assert_eq!(c, CropInsets::new(0.25, 0.0, 0.0, 0.0));
}

#[test]
fn drag_right_edge_left_increases_right() {
    let c = drag_edge(CropInsets::NONE, CropEdge::Right, Vec2::new(-40.0, 0.0), render(), MIN_VISIBLE_CROP);
    assert_eq!(c, CropInsets::new(0.0, 0.0, 0.2, 0.0));
}

#[test]
fn drag_top_and_bottom_use_height() {
    let top = drag_edge(CropInsets::NONE, CropEdge::Top, Vec2::new(99.0, 25.0), render(), MIN_VISIBLE_CROP);
    assert_eq!(top, CropInsets::new(0.0, 0.25, 0.0, 0.0));
    let bottom = drag_edge(CropInsets::NONE, CropEdge::Bottom, Vec2::new(0.0, -10.0), render(), MIN_VISIBLE_CROP);
    assert_eq!(bottom, CropInsets::new(0.0, 0.0, 0.0, 0.1));
}

#[test]
fn drag_outward_past_source_clamps_to_zero() {
    let start = CropInsets::new(0.1, 0.0, 0.0, 0.0);
    let c = drag_edge(start, CropEdge::Left, Vec2::new(-100.0, 0.0), render(), MIN_VISIBLE_CROP);
    assert_eq!(c.left, 0.0);
}

#[test]
fn drag_across_opposite_edge_keeps_sliver() {
    let start = CropInsets::new(0.0, 0.0, 0.3, 0.0);
    let c = drag_edge(start, CropEdge::Left, Vec2::new(500.0, 0.0), render(), MIN_VISIBLE_CROP);
    assert_eq!(c.right, 0.3);
    assert!(c.left + c.right < 1.0);
    assert!(approx_eq(c.visible_width_fraction(), MIN_VISIBLE_CROP));
}

#[test]
fn drag_is_relative_to_gesture_start() {
    let start = CropInsets::new(0.2, 0.0, 0.0, 0.0);
    let a = drag_edge(start, CropEdge::Left, Vec2::new(20.0, 0.0), render(), MIN_VISIBLE_CROP);
    let b = drag_edge(start, CropEdge::Left, Vec2::new(20.0, 0.0), render(), MIN_VISIBLE_CROP);
    assert_eq!(a, b);
    assert!(approx_eq(a.left, 0.3));
}

#[test]
fn drag_with_empty_container_is_noop() {
    let start = CropInsets::new(0.2, 0.1, 0.0, 0.0);
    let c = drag_edge(start, CropEdge::Left, Vec2::new(20.0, 0.0), Size::new(0.0, 100.0), MIN_VISIBLE_CROP);
    assert_eq!(c, start);
}

#[test]
fn crop_serde_round_trip() {
    let c = CropInsets::new(0.1, 0.2, 0.3, 0.4);
    let json = serde_json::to_string(&c).unwrap();
    let back: CropInsets = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
    assert_eq!(serde_json::to_string(&CropEdge::Bottom).unwrap(), "\"bottom\"");
}
