//! Crop insets for image entries.
//!
//! A crop is four independent fractions of the source width/height hidden
//! on each edge. A crop gesture grabs the nearest edge at gesture start (if
//! it is within the grab threshold), then every update moves only that edge
//! by the pointer delta normalized to the rendered size. After every change
//! each opposing pair is clamped so that some sliver stays visible.
//!
//! Cutting the actual pixels is the renderer's job; [`CropInsets::source_rect`]
//! tells it which sub-rectangle to sample.

#[cfg(test)]
#[path = "crop_test.rs"]
mod crop_test;

use serde::{Deserialize, Serialize};

use crate::consts::MIN_VISIBLE_CROP;
use crate::geom::{Point, Rect, Size, Vec2};

/// One edge of the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropEdge {
    Left,
    Top,
    Right,
    Bottom,
}

impl CropEdge {
    /// Tie-break order when two edges are equally near.
    pub const ALL: [CropEdge; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    /// The edge across from this one.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// Fractions of the source hidden on each edge, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CropInsets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Clamp an opposing pair. `keep` is limited only by `[0, 1 - min_visible]`;
/// `give` shrinks as needed so the pair leaves `min_visible` uncovered.
fn clamp_pair(keep: f64, give: f64, min_visible: f64) -> (f64, f64) {
    let keep = clamp_unit(keep).min(1.0 - min_visible);
    let give = clamp_unit(give).min(1.0 - min_visible - keep).max(0.0);
    (keep, give)
}

fn sanitize_min_visible(min_visible: f64) -> f64 {
    if min_visible > 0.0 && min_visible < 1.0 { min_visible } else { MIN_VISIBLE_CROP }
}

/// Distance from `p` to the segment `a`-`b`.
fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.dot(ab);
    if len_sq <= 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

impl CropInsets {
    /// No cropping.
    pub const NONE: CropInsets = CropInsets { left: 0.0, top: 0.0, right: 0.0, bottom: 0.0 };

    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// Whether nothing is cropped.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::NONE
    }

    #[must_use]
    pub fn get(&self, edge: CropEdge) -> f64 {
        match edge {
            CropEdge::Left => self.left,
            CropEdge::Top => self.top,
            CropEdge::Right => self.right,
            CropEdge::Bottom => self.bottom,
        }
    }

    #[must_use]
    pub fn with(mut self, edge: CropEdge, value: f64) -> Self {
        match edge {
            CropEdge::Left => self.left = value,
            CropEdge::Top => self.top = value,
            CropEdge::Right => self.right = value,
            CropEdge::Bottom => self.bottom = value,
        }
        self
    }

    /// Clamp every inset into `[0, 1]` and leave at least `min_visible` of
    /// each axis uncovered. When a pair overlaps, right/bottom give way.
    #[must_use]
    pub fn clamped(self, min_visible: f64) -> Self {
        let min_visible = sanitize_min_visible(min_visible);
        let (left, right) = clamp_pair(self.left, self.right, min_visible);
        let (top, bottom) = clamp_pair(self.top, self.bottom, min_visible);
        Self { left, top, right, bottom }
    }

    /// Like [`CropInsets::clamped`], but `moved` is the edge that gives way,
    /// so the edge opposite the one being dragged never jumps.
    #[must_use]
    pub fn clamped_favoring(self, moved: CropEdge, min_visible: f64) -> Self {
        let min_visible = sanitize_min_visible(min_visible);
        let opposite = moved.opposite();
        let (keep, give) = clamp_pair(self.get(opposite), self.get(moved), min_visible);
        let other_axis = match moved {
            CropEdge::Left | CropEdge::Right => (CropEdge::Top, CropEdge::Bottom),
            CropEdge::Top | CropEdge::Bottom => (CropEdge::Left, CropEdge::Right),
        };
        let (lead, trail) = clamp_pair(self.get(other_axis.0), self.get(other_axis.1), min_visible);
        self.with(opposite, keep).with(moved, give).with(other_axis.0, lead).with(other_axis.1, trail)
    }

    /// Visible fraction of the source width.
    #[must_use]
    pub fn visible_width_fraction(&self) -> f64 {
        1.0 - self.left - self.right
    }

    /// Visible fraction of the source height.
    #[must_use]
    pub fn visible_height_fraction(&self) -> f64 {
        1.0 - self.top - self.bottom
    }

    /// The part of `content` left visible by this crop.
    #[must_use]
    pub fn visible_rect(&self, content: Rect) -> Rect {
        Rect::from_xywh(
            content.min_x() + self.left * content.width(),
            content.min_y() + self.top * content.height(),
            (self.visible_width_fraction() * content.width()).max(0.0),
            (self.visible_height_fraction() * content.height()).max(0.0),
        )
    }

    /// Source pixel rectangle to sample for an image of `source` size.
    #[must_use]
    pub fn source_rect(&self, source: Size) -> Rect {
        self.visible_rect(Rect::new(Point::default(), source))
    }
}

/// Pick the crop edge nearest to `pointer`, if it is within `threshold`.
///
/// `pointer` is relative to the entry's rendered top-left corner and
/// `render_size` is its current on-screen size, so `threshold` is in screen
/// pixels. Ties go to the earlier edge in [`CropEdge::ALL`].
#[must_use]
pub fn pick_edge(pointer: Point, render_size: Size, insets: CropInsets, threshold: f64) -> Option<CropEdge> {
    let x0 = insets.left * render_size.width;
    let x1 = (1.0 - insets.right) * render_size.width;
    let y0 = insets.top * render_size.height;
    let y1 = (1.0 - insets.bottom) * render_size.height;

    let mut best: Option<(CropEdge, f64)> = None;
    for edge in CropEdge::ALL {
        let (a, b) = match edge {
            CropEdge::Left => (Point::new(x0, y0), Point::new(x0, y1)),
            CropEdge::Top => (Point::new(x0, y0), Point::new(x1, y0)),
            CropEdge::Right => (Point::new(x1, y0), Point::new(x1, y1)),
            CropEdge::Bottom => (Point::new(x0, y1), Point::new(x1, y1)),
        };
        let dist = distance_to_segment(pointer, a, b);
        if dist <= threshold && best.is_none_or(|(_, d)| dist < d) {
            best = Some((edge, dist));
        }
    }
    best.map(|(edge, _)| edge)
}

/// Move `edge` of the gesture-start insets by a pointer `delta`.
///
/// `delta` and `container` share a coordinate space (normally screen pixels
/// of the rendered image). Only `edge` changes before clamping; a container
/// with no extent on the dragged axis leaves `start` untouched.
#[must_use]
pub fn drag_edge(start: CropInsets, edge: CropEdge, delta: Vec2, container: Size, min_visible: f64) -> CropInsets {
    let (along, extent) = match edge {
        CropEdge::Left | CropEdge::Right => (delta.dx, container.width),
        CropEdge::Top | CropEdge::Bottom => (delta.dy, container.height),
    };
    if !extent.is_finite() || extent <= 0.0 {
        return start;
    }

    let normalized = along / extent;
    let value = match edge {
        CropEdge::Left | CropEdge::Top => start.get(edge) + normalized,
        CropEdge::Right | CropEdge::Bottom => start.get(edge) - normalized,
    };
    start.with(edge, value).clamped_favoring(edge, min_visible)
}
