//! Rounded triangle paths.
//!
//! A triangle entry carries one desired corner radius. The radius actually
//! drawn is shared by all three corners and clamped to what each corner can
//! hold: `min(adjacent edge lengths) * tan(interior_angle / 2)`. Sharp,
//! tiny or degenerate triangles therefore fall back to smaller (or zero)
//! rounding instead of self-intersecting.
//!
//! Paths are emitted as tangent arcs ([`PathCommand::ArcTo`]), the same
//! primitive as Canvas2D `arcTo`: the arc is tangent to the line from the
//! current point to `corner` and to the line from `corner` to `toward`.
//! [`resolve_arc`] turns one into an explicit center and sweep for
//! renderers without that primitive.

#[cfg(test)]
#[path = "rounded_test.rs"]
mod rounded_test;

use std::f64::consts::PI;

use crate::consts::{RADIUS_EPSILON, TAN_EPSILON};
use crate::geom::{Point, Rect, Vec2};
use crate::shape::ShapeKind;

/// One drawing command of an outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Arc of `radius` tangent to (current point → `corner`) and
    /// (`corner` → `toward`).
    ArcTo { corner: Point, toward: Point, radius: f64 },
    Close,
}

/// A closed outline plus the corner radius it was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedPath {
    pub commands: Vec<PathCommand>,
    /// Radius actually applied to every corner; `0.0` for a sharp path.
    pub radius: f64,
}

/// A tangent arc resolved to explicit geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    /// Tangent point on the incoming edge.
    pub start: Point,
    /// Tangent point on the outgoing edge.
    pub end: Point,
    /// Angle of `start` around `center`, in radians (`atan2`, y down).
    pub start_angle: f64,
    /// Signed sweep from `start_angle` to the angle of `end`.
    pub sweep: f64,
}

/// Triangle vertices for `kind` inscribed in `frame`: apex first, then
/// clockwise on screen. `None` for non-triangle kinds.
#[must_use]
pub fn triangle_vertices(kind: ShapeKind, frame: Rect) -> Option<[Point; 3]> {
    let (x0, x1, xm) = (frame.min_x(), frame.max_x(), frame.mid_x());
    let (y0, y1, ym) = (frame.min_y(), frame.max_y(), frame.mid_y());
    match kind {
        ShapeKind::TriangleUp => Some([Point::new(xm, y0), Point::new(x1, y1), Point::new(x0, y1)]),
        ShapeKind::TriangleDown => Some([Point::new(xm, y1), Point::new(x0, y0), Point::new(x1, y0)]),
        ShapeKind::TriangleLeft => Some([Point::new(x0, ym), Point::new(x1, y0), Point::new(x1, y1)]),
        ShapeKind::TriangleRight => Some([Point::new(x1, ym), Point::new(x0, y1), Point::new(x0, y0)]),
        ShapeKind::Rect | ShapeKind::Circle => None,
    }
}

/// Interior angle at `vertex` between the directions to `prev` and `next`,
/// in `[0, PI]`. A zero-length edge counts as a right angle.
#[must_use]
pub fn interior_angle(prev: Point, vertex: Point, next: Point) -> f64 {
    let u1 = (prev - vertex).normalized();
    let u2 = (next - vertex).normalized();
    u1.dot(u2).clamp(-1.0, 1.0).acos()
}

/// Largest radius the corner at `vertex` can hold.
#[must_use]
pub fn max_corner_radius(prev: Point, vertex: Point, next: Point) -> f64 {
    let half_tan = (interior_angle(prev, vertex, next) / 2.0).tan();
    if half_tan.is_nan() || half_tan <= TAN_EPSILON {
        return 0.0;
    }
    let shortest = vertex.distance(prev).min(vertex.distance(next));
    shortest * half_tan
}

/// The single radius applied to every corner: `desired` clamped to each
/// corner's maximum. Negative or NaN requests yield zero.
#[must_use]
pub fn effective_radius(vertices: [Point; 3], desired: f64) -> f64 {
    let [p0, p1, p2] = vertices;
    let desired = if desired.is_nan() { 0.0 } else { desired.max(0.0) };
    desired
        .min(max_corner_radius(p2, p0, p1))
        .min(max_corner_radius(p0, p1, p2))
        .min(max_corner_radius(p1, p2, p0))
}

fn sharp(vertices: [Point; 3]) -> RoundedPath {
    let [p0, p1, p2] = vertices;
    RoundedPath {
        commands: vec![PathCommand::MoveTo(p0), PathCommand::LineTo(p1), PathCommand::LineTo(p2), PathCommand::Close],
        radius: 0.0,
    }
}

/// Outline of the triangle `vertices` with corners rounded by up to
/// `desired`.
#[must_use]
pub fn rounded_triangle(vertices: [Point; 3], desired: f64) -> RoundedPath {
    if desired.is_nan() || desired <= RADIUS_EPSILON {
        return sharp(vertices);
    }
    let radius = effective_radius(vertices, desired);
    if radius <= RADIUS_EPSILON {
        return sharp(vertices);
    }

    let [p0, p1, p2] = vertices;
    let half_tan = (interior_angle(p2, p0, p1) / 2.0).tan();
    let start = p0 + (p1 - p0).normalized() * (radius / half_tan);
    RoundedPath {
        commands: vec![
            PathCommand::MoveTo(start),
            PathCommand::ArcTo { corner: p1, toward: p2, radius },
            PathCommand::ArcTo { corner: p2, toward: p0, radius },
            PathCommand::ArcTo { corner: p0, toward: p1, radius },
            PathCommand::Close,
        ],
        radius,
    }
}

/// [`rounded_triangle`] for a triangle entry of `kind` filling `frame`.
#[must_use]
pub fn shape_path(kind: ShapeKind, frame: Rect, desired: f64) -> Option<RoundedPath> {
    triangle_vertices(kind, frame).map(|vertices| rounded_triangle(vertices, desired))
}

/// Resolve a tangent arc drawn from `current`.
///
/// Returns `None` when the arc degenerates to a straight line to `corner`
/// (zero radius, zero-length edges, or collinear points), matching how
/// Canvas2D `arcTo` behaves.
#[must_use]
pub fn resolve_arc(current: Point, corner: Point, toward: Point, radius: f64) -> Option<Arc> {
    if radius.is_nan() || radius <= RADIUS_EPSILON {
        return None;
    }
    let u1 = (current - corner).normalized();
    let u2 = (toward - corner).normalized();
    if u1 == Vec2::default() || u2 == Vec2::default() {
        return None;
    }
    let angle = u1.dot(u2).clamp(-1.0, 1.0).acos();
    let half_tan = (angle / 2.0).tan();
    let half_sin = (angle / 2.0).sin();
    if half_tan.is_nan() || half_tan <= TAN_EPSILON || half_sin <= TAN_EPSILON || angle >= PI - TAN_EPSILON {
        return None;
    }

    let tangent = radius / half_tan;
    let start = corner + u1 * tangent;
    let end = corner + u2 * tangent;
    let center = corner + (u1 + u2).normalized() * (radius / half_sin);

    let d1 = corner - current;
    let d2 = toward - corner;
    let turn = d1.dx * d2.dy - d1.dy * d2.dx;
    let magnitude = PI - angle;
    let sweep = if turn >= 0.0 { magnitude } else { -magnitude };
    let start_angle = (start.y - center.y).atan2(start.x - center.x);

    Some(Arc { center, radius, start, end, start_angle, sweep })
}

impl RoundedPath {
    /// Whether the path has rounded corners.
    #[must_use]
    pub fn is_rounded(&self) -> bool {
        self.radius > 0.0
    }

    /// Approximate the outline as a closed polyline, `segments` chords per
    /// arc. The closing point is not repeated.
    #[must_use]
    pub fn flatten(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        let mut points: Vec<Point> = Vec::new();
        let mut current = Point::default();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    points.push(p);
                    current = p;
                }
                PathCommand::ArcTo { corner, toward, radius } => match resolve_arc(current, corner, toward, radius) {
                    Some(arc) => {
                        points.push(arc.start);
                        for i in 1..=segments {
                            #[allow(clippy::cast_precision_loss)]
                            let t = i as f64 / segments as f64;
                            let a = arc.start_angle + arc.sweep * t;
                            points.push(Point::new(arc.center.x + radius * a.cos(), arc.center.y + radius * a.sin()));
                        }
                        current = arc.end;
                    }
                    None => {
                        points.push(corner);
                        current = corner;
                    }
                },
                PathCommand::Close => {}
            }
        }
        points.dedup_by(|b, a| a.distance(*b) < RADIUS_EPSILON);
        if points.len() > 1 && points[0].distance(points[points.len() - 1]) < RADIUS_EPSILON {
            points.pop();
        }
        points
    }
}
