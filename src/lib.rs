//! Canvas geometry and transform engine for the board.
//!
//! This crate holds the numeric core behind every pointer gesture on the
//! pan/zoom board: converting between world and screen space, solving new
//! entry frames while a resize handle is dragged, locking image aspect,
//! snapping circles, tracking crop insets, and building rounded triangle
//! paths. It owns no entries and draws nothing; the host feeds it frames and
//! pointer positions and decides whether to commit the results.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`geom`] | `Point`, `Vec2`, `Size` and `Rect` value types |
//! | [`camera`] | Viewport transform between world and screen space |
//! | [`shape`] | Entry and shape kinds, triangle flip pairs |
//! | [`resize`] | Anchored resize solver and text resize |
//! | [`aspect`] | Aspect-locked resize for images |
//! | [`circle`] | Square snap and radial outline drag for circles |
//! | [`crop`] | Normalized crop insets and edge picking |
//! | [`rounded`] | Rounded triangle path construction |
//! | [`order`] | Z-order, point hit-testing and marquee selection |
//! | [`hit`] | Resize handle placement and handle hit-testing |
//! | [`gesture`] | Gesture-start snapshots threaded through each update |
//! | [`config`] | Tunable thresholds loaded from env or JSON |
//! | [`consts`] | Shared numeric constants (minimum sizes, thresholds, etc.) |

pub mod aspect;
pub mod camera;
pub mod circle;
pub mod config;
pub mod consts;
pub mod crop;
pub mod geom;
pub mod gesture;
pub mod hit;
pub mod order;
pub mod resize;
pub mod rounded;
pub mod shape;
