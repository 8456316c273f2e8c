#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Viewport;
use crate::geom::{Point, Rect};
use crate::resize::ResizeHandle;

/// World-space position of `handle` on `frame`.
#[must_use]
pub fn handle_position(frame: Rect, handle: ResizeHandle) -> Point {
    let (x0, xm, x1) = (frame.min_x(), frame.mid_x(), frame.max_x());
    let (y0, ym, y1) = (frame.min_y(), frame.mid_y(), frame.max_y());
    match handle {
        ResizeHandle::TopLeft => Point::new(x0, y0),
        ResizeHandle::Top => Point::new(xm, y0),
        ResizeHandle::TopRight => Point::new(x1, y0),
        ResizeHandle::Right => Point::new(x1, ym),
        ResizeHandle::BottomRight => Point::new(x1, y1),
        ResizeHandle::Bottom => Point::new(xm, y1),
        ResizeHandle::BottomLeft => Point::new(x0, y1),
        ResizeHandle::Left => Point::new(x0, ym),
    }
}

/// Test which of the `allowed` handles of `frame` (if any) is under
/// `screen_pt`.
///
/// Distances are measured in screen pixels so the grab area does not shrink
/// when zoomed out. The nearest handle within `radius_px` wins; ties go to
/// the earlier entry in `allowed`.
#[must_use]
pub fn handle_at(
    screen_pt: Point,
    frame: Rect,
    viewport: &Viewport,
    allowed: &[ResizeHandle],
    radius_px: f64,
) -> Option<ResizeHandle> {
    let mut best: Option<(ResizeHandle, f64)> = None;
    for &handle in allowed {
        let dist = viewport.to_screen(handle_position(frame, handle)).distance(screen_pt);
        if dist <= radius_px && best.is_none_or(|(_, d)| dist < d) {
            best = Some((handle, dist));
        }
    }
    best.map(|(handle, _)| handle)
}
