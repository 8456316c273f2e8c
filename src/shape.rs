//! Entry and shape kinds.
//!
//! The engine never stores entries, but several operations depend on what
//! kind of entry a frame belongs to: text resizes horizontally only, images
//! keep their aspect ratio, circles stay square, and triangles swap
//! orientation when a drag crosses the anchor.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};

use crate::resize::ResizeHandle;

/// Geometric variant of a shape entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Axis-aligned rectangle filling the frame.
    Rect,
    /// Circle inscribed in a square frame.
    Circle,
    /// Triangle with its apex at the top edge midpoint.
    TriangleUp,
    /// Triangle with its apex at the bottom edge midpoint.
    TriangleDown,
    /// Triangle with its apex at the left edge midpoint.
    TriangleLeft,
    /// Triangle with its apex at the right edge midpoint.
    TriangleRight,
}

impl ShapeKind {
    /// Whether this is one of the four triangle variants.
    #[must_use]
    pub fn is_triangle(self) -> bool {
        matches!(self, Self::TriangleUp | Self::TriangleDown | Self::TriangleLeft | Self::TriangleRight)
    }

    /// The variant after an axis flip.
    ///
    /// `TriangleUp`/`TriangleDown` swap on vertical inversion and
    /// `TriangleLeft`/`TriangleRight` swap on horizontal inversion. Every
    /// other combination returns `self`.
    #[must_use]
    pub fn flipped(self, inverted_x: bool, inverted_y: bool) -> Self {
        match self {
            Self::TriangleUp if inverted_y => Self::TriangleDown,
            Self::TriangleDown if inverted_y => Self::TriangleUp,
            Self::TriangleLeft if inverted_x => Self::TriangleRight,
            Self::TriangleRight if inverted_x => Self::TriangleLeft,
            other => other,
        }
    }
}

/// The kind of a board entry, as far as geometry is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Auto-height text block.
    Text,
    /// Vector shape.
    Shape(ShapeKind),
    /// Raster image; aspect-locked and croppable.
    Image,
    /// File attachment card.
    File,
    /// Freehand line, scaled with its frame.
    Line,
}

impl EntryKind {
    /// Handles a resize gesture may start from.
    #[must_use]
    pub fn allowed_handles(self) -> &'static [ResizeHandle] {
        match self {
            Self::Text => &ResizeHandle::HORIZONTAL,
            _ => &ResizeHandle::ALL,
        }
    }

    #[must_use]
    pub fn allows_handle(self, handle: ResizeHandle) -> bool {
        self.allowed_handles().contains(&handle)
    }

    /// The shape variant, for shape entries.
    #[must_use]
    pub fn shape(self) -> Option<ShapeKind> {
        match self {
            Self::Shape(kind) => Some(kind),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_circle(self) -> bool {
        self == Self::Shape(ShapeKind::Circle)
    }

    #[must_use]
    pub fn is_croppable(self) -> bool {
        self == Self::Image
    }

    #[must_use]
    pub fn locks_aspect(self) -> bool {
        self == Self::Image
    }
}
