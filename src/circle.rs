//! Square snapping for circle entries.
//!
//! Circles must stay 1:1. After any handle resize the frame is squared up
//! around its own center, so circles grow and shrink symmetrically no matter
//! which handle was dragged. Dragging the outline itself sets the diameter
//! from the pointer's distance to the center.

#[cfg(test)]
#[path = "circle_test.rs"]
mod circle_test;

use crate::geom::{Point, Rect, Size};

/// Square `frame` to `max(width, height)`, keeping its center.
///
/// Must run after [`crate::resize::solve`] and
/// [`crate::aspect::aspect_locked`]. Applying it twice is the same as once.
#[must_use]
pub fn snap_square(frame: Rect) -> Rect {
    let side = frame.width().max(frame.height());
    Rect::centered(frame.center(), Size::new(side, side))
}

/// Resize a circle by dragging its outline.
///
/// The new diameter is twice the distance from `pointer_world` to the
/// center of `frame`, never less than `min_side`.
#[must_use]
pub fn radial_resize(frame: Rect, pointer_world: Point, min_side: f64) -> Rect {
    let center = frame.center();
    let diameter = 2.0 * center.distance(pointer_world);
    let side = if diameter.is_nan() { min_side } else { diameter.max(min_side) };
    Rect::centered(center, Size::new(side, side))
}
