//! Glyph outline store
//!
//! Drawn geometry per codepoint. The store is read-only to the positioning
//! core except for the baked-ligature entries the cascade proposes.

use kurbo::Rect;
use std::collections::HashMap;

use crate::data::outline::GlyphOutline;
use crate::geometry::bbox::BboxProvider;

/// Codepoint → drawn outline
#[derive(Debug, Clone, Default)]
pub struct GlyphOutlineStore {
    outlines: HashMap<u32, GlyphOutline>,
}

impl GlyphOutlineStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, codepoint: u32) -> Option<&GlyphOutline> {
        self.outlines.get(&codepoint)
    }

    pub fn insert(&mut self, codepoint: u32, outline: GlyphOutline) {
        self.outlines.insert(codepoint, outline);
    }

    /// Whether a codepoint has any drawn geometry
    pub fn has_geometry(&self, codepoint: u32) -> bool {
        self.get(codepoint).is_some_and(|o| !o.is_empty())
    }

    /// Bounding box of a codepoint's geometry through the injected provider
    ///
    /// `default_stroke` supplies the pen width when the outline carries none.
    pub fn bounds(
        &self,
        codepoint: u32,
        provider: &dyn BboxProvider,
        default_stroke: f64,
    ) -> Option<Rect> {
        let outline = self.get(codepoint)?;
        let stroke = outline.stroke_width.unwrap_or(default_stroke);
        provider.bounding_box(&outline.to_bezpaths(), stroke)
    }

    pub fn len(&self) -> usize {
        self.outlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outlines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::outline::{Contour, ContourPoint, PointKind};
    use crate::geometry::bbox::StrokeBounds;

    fn box_outline(x0: f64, y0: f64, x1: f64, y1: f64) -> GlyphOutline {
        GlyphOutline::new(vec![Contour {
            points: vec![
                ContourPoint::new(x0, y0, PointKind::Line),
                ContourPoint::new(x1, y0, PointKind::Line),
                ContourPoint::new(x1, y1, PointKind::Line),
                ContourPoint::new(x0, y1, PointKind::Line),
            ],
        }])
    }

    #[test]
    fn bounds_fall_back_to_default_stroke() {
        let mut store = GlyphOutlineStore::new();
        store.insert(0x0915, box_outline(0.0, 0.0, 100.0, 100.0));

        let bounds = store.bounds(0x0915, &StrokeBounds, 20.0).unwrap();
        assert_eq!(bounds, Rect::new(-10.0, -10.0, 110.0, 110.0));
    }

    #[test]
    fn missing_glyph_has_no_bounds() {
        let store = GlyphOutlineStore::new();
        assert!(store.bounds(0x0915, &StrokeBounds, 20.0).is_none());
        assert!(!store.has_geometry(0x0915));
    }
}
