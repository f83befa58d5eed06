//! Attachment point grid for mark positioning
//!
//! This module provides an 8-point grid over a glyph's bounding box used as
//! positioning anchors when computing where a mark sits on a base.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Eight named locations on a bounding box used as attachment anchors
///
/// Think of this as a 3x3 grid with the center removed:
///
/// ```text
/// TopLeft     Top     TopRight
/// Left                Right
/// BottomLeft  Bottom  BottomRight
/// ```
///
/// `Top` and `Bottom` are the horizontal-center points of the top and
/// bottom edges; `Left` and `Right` are the vertical midpoints of the side
/// edges. Coordinates are in font design space, y up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AttachPoint {
    #[default]
    Top,
    TopLeft,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
}

impl AttachPoint {
    /// Resolve this attachment point to a concrete location on a bounding box
    pub fn point_on(&self, bbox: Rect) -> Point {
        let cx = (bbox.min_x() + bbox.max_x()) / 2.0;
        let cy = (bbox.min_y() + bbox.max_y()) / 2.0;
        match self {
            Self::TopLeft => Point::new(bbox.min_x(), bbox.max_y()),
            Self::Top => Point::new(cx, bbox.max_y()),
            Self::TopRight => Point::new(bbox.max_x(), bbox.max_y()),
            Self::Right => Point::new(bbox.max_x(), cy),
            Self::BottomRight => Point::new(bbox.max_x(), bbox.min_y()),
            Self::Bottom => Point::new(cx, bbox.min_y()),
            Self::BottomLeft => Point::new(bbox.min_x(), bbox.min_y()),
            Self::Left => Point::new(bbox.min_x(), cy),
        }
    }
}
