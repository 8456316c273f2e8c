//! Anchored resize solver.
//!
//! Given the frame captured at gesture start, the handle being dragged, and
//! the world-space pointer delta since gesture start, [`solve`] computes the
//! new frame. The edge or corner opposite the handle (the anchor) never
//! moves. Each active axis is solved independently:
//!
//! 1. the moving coordinate is the start edge plus the delta,
//! 2. the frame spans `min(moving, anchor)..max(moving, anchor)`,
//! 3. spans shorter than `min_size` are pushed out from the anchor,
//! 4. the axis is reported inverted when the moving edge is now on the
//!    other side of the anchor than it started.
//!
//! Callers map inversions onto directional shape variants (see
//! [`crate::shape::ShapeKind::flipped`]); the solver reports them only.

#[cfg(test)]
#[path = "resize_test.rs"]
mod resize_test;

use serde::{Deserialize, Serialize};

use crate::geom::{Rect, Vec2};

/// Which resize handle is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeHandle {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Which side of the anchor the moving edge sits on, per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// The handle moves the min edge (left or top).
    Min,
    /// The handle moves the max edge (right or bottom).
    Max,
}

impl ResizeHandle {
    /// All eight handles, corners first, clockwise from top-left.
    pub const ALL: [ResizeHandle; 8] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
    ];

    /// The handles usable on horizontally-resizable entries (text).
    pub const HORIZONTAL: [ResizeHandle; 2] = [Self::Left, Self::Right];

    fn x_side(self) -> Option<Side> {
        match self {
            Self::Left | Self::TopLeft | Self::BottomLeft => Some(Side::Min),
            Self::Right | Self::TopRight | Self::BottomRight => Some(Side::Max),
            Self::Top | Self::Bottom => None,
        }
    }

    fn y_side(self) -> Option<Side> {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => Some(Side::Min),
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Some(Side::Max),
            Self::Left | Self::Right => None,
        }
    }

    /// Whether dragging this handle changes the width.
    #[must_use]
    pub fn moves_x(self) -> bool {
        self.x_side().is_some()
    }

    /// Whether dragging this handle changes the height.
    #[must_use]
    pub fn moves_y(self) -> bool {
        self.y_side().is_some()
    }

    /// Whether this is one of the four corner handles.
    #[must_use]
    pub fn is_corner(self) -> bool {
        self.moves_x() && self.moves_y()
    }

    /// The x coordinate held fixed while dragging this handle on `frame`.
    #[must_use]
    pub fn anchor_x(self, frame: Rect) -> Option<f64> {
        self.x_side().map(|side| match side {
            Side::Min => frame.max_x(),
            Side::Max => frame.min_x(),
        })
    }

    /// The y coordinate held fixed while dragging this handle on `frame`.
    #[must_use]
    pub fn anchor_y(self, frame: Rect) -> Option<f64> {
        self.y_side().map(|side| match side {
            Side::Min => frame.max_y(),
            Side::Max => frame.min_y(),
        })
    }
}

/// Result of a resize solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOutcome {
    /// The new frame; width and height are at least `min_size`.
    pub rect: Rect,
    /// The drag has crossed the anchor on the horizontal axis.
    pub inverted_x: bool,
    /// The drag has crossed the anchor on the vertical axis.
    pub inverted_y: bool,
}

/// Solved span on one axis.
struct AxisSpan {
    origin: f64,
    length: f64,
    inverted: bool,
}

/// Solve one axis. `start_min`/`start_max` are the frame edges at gesture
/// start and `side` says which of them the handle drags.
fn solve_axis(start_min: f64, start_max: f64, side: Side, delta: f64, min_size: f64) -> AxisSpan {
    let (start_moving, anchor) = match side {
        Side::Min => (start_min, start_max),
        Side::Max => (start_max, start_min),
    };
    let moving = start_moving + delta;
    let initial_moving_less = start_moving < anchor;
    let moving_less = moving < anchor;

    let lo = moving.min(anchor);
    let hi = moving.max(anchor);
    let (origin, length) = if hi - lo >= min_size {
        (lo, hi - lo)
    } else if moving_less {
        (anchor - min_size, min_size)
    } else {
        (anchor, min_size)
    };

    AxisSpan { origin, length, inverted: moving_less != initial_moving_less }
}

/// Resize `start` by dragging `handle` by the world-space `delta`.
///
/// Axes the handle does not touch are copied from `start` unchanged. A
/// non-positive or NaN `min_size` disables the floor only down to zero.
#[must_use]
pub fn solve(start: Rect, handle: ResizeHandle, delta: Vec2, min_size: f64) -> ResizeOutcome {
    let min_size = if min_size.is_nan() { 0.0 } else { min_size.max(0.0) };
    let mut rect = start;
    let mut inverted_x = false;
    let mut inverted_y = false;

    if let Some(side) = handle.x_side() {
        let span = solve_axis(start.min_x(), start.max_x(), side, delta.dx, min_size);
        rect.origin.x = span.origin;
        rect.size.width = span.length;
        inverted_x = span.inverted;
    }
    if let Some(side) = handle.y_side() {
        let span = solve_axis(start.min_y(), start.max_y(), side, delta.dy, min_size);
        rect.origin.y = span.origin;
        rect.size.height = span.length;
        inverted_y = span.inverted;
    }

    ResizeOutcome { rect, inverted_x, inverted_y }
}

/// Resize a text entry.
///
/// Only the horizontal solve runs; vertical handles leave the width alone.
/// The height is replaced by `current_height`, which the text layout
/// collaborator computes for the new width.
#[must_use]
pub fn resize_text(start: Rect, handle: ResizeHandle, dx: f64, current_height: f64, min_size: f64) -> ResizeOutcome {
    let horizontal = match handle.x_side() {
        Some(Side::Min) => Some(ResizeHandle::Left),
        Some(Side::Max) => Some(ResizeHandle::Right),
        None => None,
    };
    let mut outcome = match horizontal {
        Some(h) => solve(start, h, Vec2::new(dx, 0.0), min_size),
        None => ResizeOutcome { rect: start, inverted_x: false, inverted_y: false },
    };
    outcome.rect.size.height = if current_height.is_nan() { 0.0 } else { current_height.max(0.0) };
    outcome
}
