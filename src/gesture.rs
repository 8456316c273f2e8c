//! Gesture sessions: start-of-drag snapshots threaded through every update.
//!
//! The host constructs a [`GestureSession`] on pointer-down, calls
//! [`GestureSession::update`] on every pointer-move, and drops it on
//! pointer-up (or when pointer capture is lost). The session never mutates
//! itself, so identical pointer positions always produce identical results
//! and abandoning a drag needs no cleanup. Whether to record an undo step
//! for the final [`GestureUpdate`] is the host's call.
//!
//! Pointer coordinates are in world space for resize and outline gestures
//! and in the entry's rendered local space (screen pixels from its top-left
//! corner) for crop gestures.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use tracing::{debug, trace};

use crate::aspect::{aspect_locked, aspect_of};
use crate::camera::Viewport;
use crate::circle::{radial_resize, snap_square};
use crate::config::EngineConfig;
use crate::crop::{CropEdge, CropInsets, drag_edge, pick_edge};
use crate::geom::{Point, Rect, Size};
use crate::hit::handle_at;
use crate::resize::{ResizeHandle, resize_text, solve};
use crate::shape::{EntryKind, ShapeKind};

/// Errors from starting a gesture the entry cannot perform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GestureError {
    /// The handle is not offered on this kind of entry.
    #[error("{handle:?} handle cannot resize a {kind:?} entry")]
    UnsupportedHandle { kind: EntryKind, handle: ResizeHandle },

    /// Only images can be cropped.
    #[error("{0:?} entry cannot be cropped")]
    NotCroppable(EntryKind),

    /// Only circles have a draggable outline.
    #[error("{0:?} entry has no circular outline")]
    NotCircle(EntryKind),
}

/// What the gesture does, plus the state captured for it at start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureKind {
    /// Dragging one of the eight frame handles.
    Resize { handle: ResizeHandle },
    /// Dragging a circle's outline.
    CircleOutline,
    /// Dragging one crop edge of an image.
    Crop {
        /// The edge picked at gesture start; fixed for the whole gesture.
        edge: CropEdge,
        /// Insets at gesture start.
        start_crop: CropInsets,
        /// Rendered size of the image at gesture start.
        render_size: Size,
    },
}

/// Geometry computed for one pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureUpdate {
    /// New world frame of the entry.
    pub frame: Rect,
    /// Shape variant after axis flips, for shape entries.
    pub shape: Option<ShapeKind>,
    /// New crop insets, for crop gestures.
    pub crop: Option<CropInsets>,
    /// The drag has crossed the anchor horizontally.
    pub inverted_x: bool,
    /// The drag has crossed the anchor vertically.
    pub inverted_y: bool,
}

/// Snapshot of an entry and pointer captured once at gesture start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    entry: EntryKind,
    start_frame: Rect,
    start_pointer: Point,
    kind: GestureKind,
    aspect: Option<f64>,
    config: EngineConfig,
}

impl GestureSession {
    /// Start a resize from `handle`.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::UnsupportedHandle`] if `entry` does not offer
    /// `handle` (text entries only resize from `Left`/`Right`).
    pub fn resize(
        entry: EntryKind,
        start_frame: Rect,
        handle: ResizeHandle,
        pointer_world: Point,
        config: EngineConfig,
    ) -> Result<Self, GestureError> {
        if !entry.allows_handle(handle) {
            return Err(GestureError::UnsupportedHandle { kind: entry, handle });
        }
        let aspect = if entry.locks_aspect() { aspect_of(start_frame) } else { None };
        debug!(?entry, ?handle, ?start_frame, "gesture: resize started");
        Ok(Self { entry, start_frame, start_pointer: pointer_world, kind: GestureKind::Resize { handle }, aspect, config })
    }

    /// Start a resize if `screen_pt` is over one of the entry's handles.
    #[must_use]
    pub fn resize_from_screen(
        entry: EntryKind,
        start_frame: Rect,
        screen_pt: Point,
        viewport: &Viewport,
        config: EngineConfig,
    ) -> Option<Self> {
        let handle = handle_at(screen_pt, start_frame, viewport, entry.allowed_handles(), config.handle_radius_px)?;
        let aspect = if entry.locks_aspect() { aspect_of(start_frame) } else { None };
        debug!(?entry, ?handle, ?start_frame, "gesture: resize started from screen point");
        Some(Self {
            entry,
            start_frame,
            start_pointer: viewport.to_world(screen_pt),
            kind: GestureKind::Resize { handle },
            aspect,
            config,
        })
    }

    /// Start dragging a circle's outline.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::NotCircle`] for any other entry kind.
    pub fn circle_outline(
        entry: EntryKind,
        start_frame: Rect,
        pointer_world: Point,
        config: EngineConfig,
    ) -> Result<Self, GestureError> {
        if !entry.is_circle() {
            return Err(GestureError::NotCircle(entry));
        }
        debug!(?start_frame, "gesture: circle outline drag started");
        Ok(Self { entry, start_frame, start_pointer: pointer_world, kind: GestureKind::CircleOutline, aspect: None, config })
    }

    /// Start a crop drag on the edge nearest `pointer_local`.
    ///
    /// `pointer_local` is relative to the image's rendered top-left corner
    /// and `render_size` is its on-screen size. Returns `Ok(None)` when no
    /// crop edge is within the grab threshold; the gesture is then a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::NotCroppable`] for non-image entries.
    pub fn crop(
        entry: EntryKind,
        start_frame: Rect,
        start_crop: CropInsets,
        pointer_local: Point,
        render_size: Size,
        config: EngineConfig,
    ) -> Result<Option<Self>, GestureError> {
        if !entry.is_croppable() {
            return Err(GestureError::NotCroppable(entry));
        }
        let Some(edge) = pick_edge(pointer_local, render_size, start_crop, config.crop_edge_threshold_px) else {
            trace!(?pointer_local, "gesture: no crop edge within reach");
            return Ok(None);
        };
        debug!(?edge, ?start_crop, "gesture: crop started");
        Ok(Some(Self {
            entry,
            start_frame,
            start_pointer: pointer_local,
            kind: GestureKind::Crop { edge, start_crop, render_size },
            aspect: None,
            config,
        }))
    }

    #[must_use]
    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    #[must_use]
    pub fn entry(&self) -> EntryKind {
        self.entry
    }

    #[must_use]
    pub fn start_frame(&self) -> Rect {
        self.start_frame
    }

    /// Geometry for the current pointer position.
    ///
    /// Text entries keep their gesture-start height; use
    /// [`GestureSession::update_with_height`] when the layout has re-measured.
    #[must_use]
    pub fn update(&self, pointer: Point) -> GestureUpdate {
        self.update_with_height(pointer, self.start_frame.height())
    }

    /// Like [`GestureSession::update`], with the text layout's current height.
    /// `text_height` is ignored for non-text entries.
    #[must_use]
    pub fn update_with_height(&self, pointer: Point, text_height: f64) -> GestureUpdate {
        let update = match self.kind {
            GestureKind::Resize { handle } => self.resize_update(handle, pointer, text_height),
            GestureKind::CircleOutline => GestureUpdate {
                frame: radial_resize(self.start_frame, pointer, self.config.circle_min_side),
                shape: self.entry.shape(),
                crop: None,
                inverted_x: false,
                inverted_y: false,
            },
            GestureKind::Crop { edge, start_crop, render_size } => GestureUpdate {
                frame: self.start_frame,
                shape: self.entry.shape(),
                crop: Some(drag_edge(
                    start_crop,
                    edge,
                    pointer - self.start_pointer,
                    render_size,
                    self.config.min_visible_crop,
                )),
                inverted_x: false,
                inverted_y: false,
            },
        };
        trace!(?pointer, frame = ?update.frame, "gesture: update");
        update
    }

    /// [`GestureSession::update`] for a screen-space pointer on a resize or
    /// outline gesture.
    #[must_use]
    pub fn update_from_screen(&self, screen_pt: Point, viewport: &Viewport) -> GestureUpdate {
        self.update(viewport.to_world(screen_pt))
    }

    fn resize_update(&self, handle: ResizeHandle, pointer: Point, text_height: f64) -> GestureUpdate {
        let delta = pointer - self.start_pointer;
        let min_size = self.config.min_size;

        if self.entry == EntryKind::Text {
            let outcome = resize_text(self.start_frame, handle, delta.dx, text_height, min_size);
            return GestureUpdate {
                frame: outcome.rect,
                shape: None,
                crop: None,
                inverted_x: outcome.inverted_x,
                inverted_y: false,
            };
        }

        let outcome = solve(self.start_frame, handle, delta, min_size);
        let mut frame = outcome.rect;
        if let Some(aspect) = self.aspect {
            frame = aspect_locked(frame, self.start_frame, aspect, handle, min_size);
        }
        if self.entry.is_circle() {
            frame = snap_square(frame);
        }

        GestureUpdate {
            frame,
            shape: self.entry.shape().map(|shape| shape.flipped(outcome.inverted_x, outcome.inverted_y)),
            crop: None,
            inverted_x: outcome.inverted_x,
            inverted_y: outcome.inverted_y,
        }
    }
}
