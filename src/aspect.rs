//! Aspect-locked resize for images.
//!
//! Runs on the raw output of [`crate::resize::solve`]. Whichever dimension
//! changed more since gesture start drives the result and the other is
//! derived from the locked aspect. The result is then re-anchored:
//!
//! | Handle | x placement | y placement |
//! |--------|-------------|-------------|
//! | `TopLeft` | ends at start `max_x` | ends at start `max_y` |
//! | `TopRight` | starts at start `min_x` | ends at start `max_y` |
//! | `BottomLeft` | ends at start `max_x` | starts at start `min_y` |
//! | `BottomRight` | starts at start `min_x` | starts at start `min_y` |
//! | `Top` | centered on start `mid_x` | ends at start `max_y` |
//! | `Bottom` | centered on start `mid_x` | starts at start `min_y` |
//! | `Left` | ends at start `max_x` | centered on start `mid_y` |
//! | `Right` | starts at start `min_x` | centered on start `mid_y` |
//!
//! When the raw frame has been dragged through its anchor, placement on that
//! axis mirrors to the other side of the same anchor.

#[cfg(test)]
#[path = "aspect_test.rs"]
mod aspect_test;

use std::cmp::Ordering;

use crate::geom::{Rect, Size};
use crate::resize::ResizeHandle;

/// Width-over-height of `frame`, or `None` when it has no usable height.
#[must_use]
pub fn aspect_of(frame: Rect) -> Option<f64> {
    let aspect = frame.width() / frame.height();
    (aspect.is_finite() && aspect > 0.0).then_some(aspect)
}

/// Size with the given `aspect`, driven by whichever dimension of `raw`
/// moved further from `start`.
fn locked_size(raw: Rect, start: Rect, aspect: f64, handle: ResizeHandle, min_size: f64) -> Size {
    let dw = (raw.width() - start.width()).abs();
    let dh = (raw.height() - start.height()).abs();
    let width_drives = match dw.partial_cmp(&dh) {
        Some(Ordering::Greater) => true,
        Some(Ordering::Less) => false,
        _ => handle.moves_x(),
    };

    if width_drives {
        let width = raw.width();
        let height = width / aspect;
        if height < min_size { Size::new(min_size * aspect, min_size) } else { Size::new(width, height) }
    } else {
        let height = raw.height();
        let width = height * aspect;
        if width < min_size { Size::new(min_size, min_size / aspect) } else { Size::new(width, height) }
    }
}

/// Place a span of `length` against `anchor` on the side where `raw_min`
/// lies, or center it on `mid` when the handle leaves this axis alone.
fn place(anchor: Option<f64>, raw_min: f64, mid: f64, length: f64) -> f64 {
    match anchor {
        Some(anchor) if raw_min < anchor => anchor - length,
        Some(anchor) => anchor,
        None => mid - length / 2.0,
    }
}

/// Constrain the solver's `raw` frame to `aspect` (width / height).
///
/// `start` is the frame captured at gesture start. A non-finite or
/// non-positive `aspect` cannot be honored and returns `raw` unchanged.
#[must_use]
pub fn aspect_locked(raw: Rect, start: Rect, aspect: f64, handle: ResizeHandle, min_size: f64) -> Rect {
    if !aspect.is_finite() || aspect <= 0.0 {
        return raw;
    }

    let size = locked_size(raw, start, aspect, handle, min_size);
    let x = place(handle.anchor_x(start), raw.min_x(), start.mid_x(), size.width);
    let y = place(handle.anchor_y(start), raw.min_y(), start.mid_y(), size.height);
    Rect::from_xywh(x, y, size.width, size.height)
}
