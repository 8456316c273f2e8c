#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn vp(zoom: f64, dx: f64, dy: f64) -> Viewport {
    Viewport::new(zoom, Vec2::new(dx, dy))
}

// --- Defaults ---

#[test]
fn viewport_default_is_identity() {
    let v = Viewport::default();
    assert_eq!(v.zoom, 1.0);
    assert_eq!(v.offset, Vec2::default());
    assert_eq!(v.to_screen(Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
}

// --- to_world ---

#[test]
fn to_world_with_zoom() {
    let world = vp(4.0, 0.0, 0.0).to_world(Point::new(40.0, 80.0));
    assert!(point_approx_eq(world, Point::new(10.0, 20.0)));
}

#[test]
fn to_world_with_offset() {
    let world = vp(1.0, 100.0, 50.0).to_world(Point::new(100.0, 50.0));
    assert!(point_approx_eq(world, Point::new(0.0, 0.0)));
}

#[test]
fn to_world_scenario_point() {
    let world = to_world(Point::new(110.0, 210.0), vp(2.0, 10.0, 10.0));
    assert!(point_approx_eq(world, Point::new(50.0, 100.0)));
}

#[test]
fn to_world_screen_origin() {
    let world = vp(2.0, 50.0, 30.0).to_world(Point::new(0.0, 0.0));
    assert!(point_approx_eq(world, Point::new(-25.0, -15.0)));
}

// --- to_screen ---

#[test]
fn to_screen_with_offset_and_zoom() {
    let screen = to_screen(Point::new(5.0, 5.0), vp(3.0, 20.0, 10.0));
    // 5*3 + 20 = 35, 5*3 + 10 = 25
    assert!(point_approx_eq(screen, Point::new(35.0, 25.0)));
}

#[test]
fn round_trip_is_identity() {
    let v = vp(1.7, -33.0, 12.5);
    for p in [Point::new(0.0, 0.0), Point::new(123.456, -78.9), Point::new(-1e4, 1e4)] {
        assert!(point_approx_eq(v.to_world(v.to_screen(p)), p));
        assert!(point_approx_eq(v.to_screen(v.to_world(p)), p));
    }
}

// --- Degenerate zoom ---

#[test]
fn zero_zoom_is_floored() {
    let v = vp(0.0, 0.0, 0.0);
    let world = v.to_world(Point::new(1.0, 1.0));
    assert!(world.x.is_finite());
    assert!(world.y.is_finite());
    assert_eq!(v.effective_zoom(), ZOOM_EPSILON);
}

#[test]
fn negative_zoom_is_floored() {
    let v = vp(-2.0, 0.0, 0.0);
    assert_eq!(v.effective_zoom(), ZOOM_EPSILON);
    assert!(v.screen_dist_to_world(10.0).is_finite());
}

#[test]
fn nan_zoom_is_floored() {
    let v = vp(f64::NAN, 0.0, 0.0);
    assert_eq!(v.effective_zoom(), ZOOM_EPSILON);
}

// --- Distances and rects ---

#[test]
fn screen_dist_to_world_divides_by_zoom() {
    assert!(approx_eq(vp(2.0, 7.0, 7.0).screen_dist_to_world(18.0), 9.0));
}

#[test]
fn screen_delta_ignores_offset() {
    let d = vp(4.0, 100.0, 100.0).screen_delta_to_world(Vec2::new(8.0, -4.0));
    assert!(approx_eq(d.dx, 2.0));
    assert!(approx_eq(d.dy, -1.0));
}

#[test]
fn rect_to_screen_and_back() {
    let v = vp(2.0, 10.0, 10.0);
    let world = Rect::from_xywh(0.0, 0.0, 200.0, 100.0);
    let screen = v.rect_to_screen(world);
    assert_eq!(screen, Rect::from_xywh(10.0, 10.0, 400.0, 200.0));
    let back = v.rect_to_world(screen);
    assert!(point_approx_eq(back.origin, world.origin));
    assert!(approx_eq(back.width(), 200.0));
    assert!(approx_eq(back.height(), 100.0));
}

// --- Pan / zoom helpers ---

#[test]
fn pan_by_shifts_offset() {
    let v = vp(2.0, 10.0, 10.0).pan_by(Vec2::new(5.0, -5.0));
    assert_eq!(v.offset, Vec2::new(15.0, 5.0));
    assert_eq!(v.zoom, 2.0);
}

#[test]
fn zoom_about_keeps_anchor_fixed() {
    let v = vp(1.0, 40.0, -20.0);
    let anchor = Point::new(300.0, 200.0);
    let before = v.to_world(anchor);
    let zoomed = v.zoom_about(anchor, 3.5);
    assert_eq!(zoomed.zoom, 3.5);
    assert!(point_approx_eq(zoomed.to_world(anchor), before));
}

#[test]
fn zoom_about_floors_zoom() {
    let zoomed = Viewport::default().zoom_about(Point::new(0.0, 0.0), 0.0);
    assert_eq!(zoomed.zoom, ZOOM_EPSILON);
}
