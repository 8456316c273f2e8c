#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::ZOOM_EPSILON;
use crate::geom::{Point, Rect, Size, Vec2};

/// Pan/zoom state of the board.
///
/// `offset` is in screen pixels.
/// `zoom` is a scale factor (1.0 = no zoom). The host clamps it to its own
/// range; the transform only floors it at [`ZOOM_EPSILON`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub zoom: f64,
    pub offset: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { zoom: 1.0, offset: Vec2::default() }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(zoom: f64, offset: Vec2) -> Self {
        Self { zoom, offset }
    }

    /// Zoom actually used by the transform: never below [`ZOOM_EPSILON`].
    #[must_use]
    pub fn effective_zoom(&self) -> f64 {
        if self.zoom.is_nan() { ZOOM_EPSILON } else { self.zoom.max(ZOOM_EPSILON) }
    }

    /// Convert a world-space point to screen coordinates.
    #[must_use]
    pub fn to_screen(&self, world: Point) -> Point {
        let zoom = self.effective_zoom();
        Point::new(world.x * zoom + self.offset.dx, world.y * zoom + self.offset.dy)
    }

    /// Convert a screen-space point to world coordinates.
    #[must_use]
    pub fn to_world(&self, screen: Point) -> Point {
        let zoom = self.effective_zoom();
        Point::new((screen.x - self.offset.dx) / zoom, (screen.y - self.offset.dy) / zoom)
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.effective_zoom()
    }

    /// Convert a screen-space pointer delta to a world-space delta.
    #[must_use]
    pub fn screen_delta_to_world(&self, delta: Vec2) -> Vec2 {
        delta * (1.0 / self.effective_zoom())
    }

    #[must_use]
    pub fn rect_to_screen(&self, world: Rect) -> Rect {
        let zoom = self.effective_zoom();
        Rect::new(self.to_screen(world.origin), Size::new(world.width() * zoom, world.height() * zoom))
    }

    #[must_use]
    pub fn rect_to_world(&self, screen: Rect) -> Rect {
        let zoom = self.effective_zoom();
        Rect::new(self.to_world(screen.origin), Size::new(screen.width() / zoom, screen.height() / zoom))
    }

    /// Shift the view by a screen-space delta.
    #[must_use]
    pub fn pan_by(&self, screen_delta: Vec2) -> Self {
        Self { zoom: self.zoom, offset: self.offset + screen_delta }
    }

    /// Change zoom while keeping the world point under `screen_anchor` fixed.
    #[must_use]
    pub fn zoom_about(&self, screen_anchor: Point, new_zoom: f64) -> Self {
        let world = self.to_world(screen_anchor);
        let zoom = if new_zoom.is_nan() { ZOOM_EPSILON } else { new_zoom.max(ZOOM_EPSILON) };
        let offset = Vec2::new(screen_anchor.x - world.x * zoom, screen_anchor.y - world.y * zoom);
        Self { zoom, offset }
    }
}

/// Free-function form of [`Viewport::to_screen`].
#[must_use]
pub fn to_screen(p: Point, vp: Viewport) -> Point {
    vp.to_screen(p)
}

/// Free-function form of [`Viewport::to_world`].
#[must_use]
pub fn to_world(p: Point, vp: Viewport) -> Point {
    vp.to_world(p)
}
