//! Glyph outline data
//!
//! The editing front end stores glyph geometry as contours of typed points
//! (the same shape it draws and hit-tests). This module converts that
//! representation into `kurbo::BezPath` for bounding-box extraction, and
//! provides the pure translate/merge operations ligature baking is built
//! from.

use kurbo::{BezPath, Point, Vec2};
use serde::{Deserialize, Serialize};

/// How a contour point participates in its segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Move,
    Line,
    OffCurve,
    Curve,
    QCurve,
}

/// A single point in a drawn contour
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContourPoint {
    pub x: f64,
    pub y: f64,
    pub kind: PointKind,
}

impl ContourPoint {
    pub fn new(x: f64, y: f64, kind: PointKind) -> Self {
        Self { x, y, kind }
    }
}

/// A closed contour of typed points
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub points: Vec<ContourPoint>,
}

/// The drawn geometry of one glyph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphOutline {
    pub contours: Vec<Contour>,
    /// Stroke width of the drawing pen; falls back to the font default
    #[serde(default)]
    pub stroke_width: Option<f64>,
}

impl Contour {
    /// Build a closed `BezPath`, buffering off-curve points until the next
    /// on-curve point decides whether they form a cubic or quadratic segment
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some(first) = self.points.first() else {
            return path;
        };
        let start = Point::new(first.x, first.y);
        path.move_to(start);

        let mut pending: Vec<Point> = Vec::new();
        for point in &self.points[1..] {
            let pt = Point::new(point.x, point.y);
            match point.kind {
                PointKind::Move => path.move_to(pt),
                PointKind::OffCurve => pending.push(pt),
                PointKind::Line => path.line_to(pt),
                PointKind::Curve => flush_cubic(&mut path, &mut pending, pt),
                PointKind::QCurve => flush_quadratic(&mut path, &mut pending, pt),
            }
        }

        // The first point's kind decides how the wrap-around segment from
        // the last point reaches it again.
        match first.kind {
            PointKind::Curve => flush_cubic(&mut path, &mut pending, start),
            PointKind::QCurve => flush_quadratic(&mut path, &mut pending, start),
            PointKind::Line | PointKind::OffCurve => path.line_to(start),
            PointKind::Move => {}
        }

        path.close_path();
        path
    }

    /// A fresh copy of this contour moved by `delta`
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            points: self
                .points
                .iter()
                .map(|p| ContourPoint::new(p.x + delta.x, p.y + delta.y, p.kind))
                .collect(),
        }
    }
}

/// Close a cubic segment out of up to two buffered off-curve points
fn flush_cubic(path: &mut BezPath, pending: &mut Vec<Point>, end: Point) {
    match pending.len() {
        0 => path.line_to(end),
        1 => path.quad_to(pending[0], end),
        n => path.curve_to(pending[n - 2], pending[n - 1], end),
    }
    pending.clear();
}

/// Close a quadratic spline, inserting implied on-curve midpoints between
/// consecutive off-curve points (TrueType convention)
fn flush_quadratic(path: &mut BezPath, pending: &mut Vec<Point>, end: Point) {
    if pending.is_empty() {
        path.line_to(end);
        return;
    }
    for i in 0..pending.len() {
        let control = pending[i];
        let segment_end = if i == pending.len() - 1 {
            end
        } else {
            let next = pending[i + 1];
            Point::new((control.x + next.x) / 2.0, (control.y + next.y) / 2.0)
        };
        path.quad_to(control, segment_end);
    }
    pending.clear();
}

impl GlyphOutline {
    pub fn new(contours: Vec<Contour>) -> Self {
        Self {
            contours,
            stroke_width: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.contours.iter().all(|c| c.points.is_empty())
    }

    pub fn to_bezpaths(&self) -> Vec<BezPath> {
        self.contours.iter().map(Contour::to_bezpath).collect()
    }

    /// A fresh outline with every contour moved by `delta`
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            contours: self.contours.iter().map(|c| c.translated(delta)).collect(),
            stroke_width: self.stroke_width,
        }
    }

    /// Composite outline: this glyph's contours followed by another's
    pub fn merged(&self, other: &Self) -> Self {
        let mut contours = self.contours.clone();
        contours.extend(other.contours.iter().cloned());
        Self {
            contours,
            stroke_width: self.stroke_width,
        }
    }
}
