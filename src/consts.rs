//! Shared numeric constants for the geometry crate.

// ── Viewport ────────────────────────────────────────────────────

/// Smallest zoom the transform will divide by.
pub const ZOOM_EPSILON: f64 = 1e-6;

// ── Resize ──────────────────────────────────────────────────────

/// Minimum width/height of a resized frame, in world units.
pub const MIN_SIZE: f64 = 0.01;

/// Minimum side of a circle resized by dragging its outline, in world units.
pub const CIRCLE_MIN_SIDE: f64 = 10.0;

// ── Crop ────────────────────────────────────────────────────────

/// Screen-space distance in pixels within which a crop edge can be grabbed.
pub const CROP_EDGE_THRESHOLD_PX: f64 = 18.0;

/// Smallest visible fraction left between two opposing crop insets.
pub const MIN_VISIBLE_CROP: f64 = 0.01;

// ── Rounding ────────────────────────────────────────────────────

/// Radii at or below this are treated as zero (sharp corners).
pub const RADIUS_EPSILON: f64 = 1e-6;

/// Half-angle tangents at or below this yield a zero corner radius.
pub const TAN_EPSILON: f64 = 1e-9;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for resize handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;
