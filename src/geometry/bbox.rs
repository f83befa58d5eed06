//! Bounding box extraction for glyph geometry
//!
//! The engine never owns bounding-box computation: embedders inject a
//! [`BboxProvider`] so the same core works against live editing geometry or
//! pre-computed boxes. [`StrokeBounds`] is the provider used by tests and
//! simple embedders.

use kurbo::{BezPath, Rect, Shape};

/// Source of axis-aligned bounding boxes for drawn glyph geometry
///
/// Returns `None` when the glyph has no drawn paths. Implementations must
/// be pure: fresh output, no input mutation.
pub trait BboxProvider {
    /// Compute the box enclosing `contours`, accounting for stroke width
    fn bounding_box(&self, contours: &[BezPath], stroke_width: f64) -> Option<Rect>;
}

/// Default provider: union of path bounds, outset by half the stroke width
#[derive(Debug, Clone, Copy, Default)]
pub struct StrokeBounds;

impl BboxProvider for StrokeBounds {
    fn bounding_box(&self, contours: &[BezPath], stroke_width: f64) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        for path in contours {
            if path.elements().is_empty() {
                continue;
            }
            let path_bounds = path.bounding_box();
            bounds = Some(match bounds {
                Some(b) => b.union(path_bounds),
                None => path_bounds,
            });
        }
        bounds.map(|b| b.inflate(stroke_width / 2.0, stroke_width / 2.0))
    }
}
