//! Font metrics and measurement data
//!
//! Vertical metrics and spacing defaults for the font being authored. The
//! positioning engine only reads these at the side-by-side fallback tier,
//! where a pair has no Unicode metadata and no authored rule to go on.

use serde::{Deserialize, Serialize};

/// Font-wide metrics with sensible per-UPM defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontMetrics {
    pub units_per_em: f64,
    #[serde(default)]
    pub ascender: Option<f64>,
    #[serde(default)]
    pub descender: Option<f64>,
    /// Default left side bearing for glyphs that carry none
    #[serde(default)]
    pub default_left_bearing: Option<f64>,
    /// Default right side bearing for glyphs that carry none
    #[serde(default)]
    pub default_right_bearing: Option<f64>,
    /// Default pen stroke width for outlines that carry none
    #[serde(default)]
    pub default_stroke_width: Option<f64>,
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            units_per_em: 1024.0,
            ascender: None,
            descender: None,
            default_left_bearing: None,
            default_right_bearing: None,
            default_stroke_width: None,
        }
    }
}

impl FontMetrics {
    /// Get ascender value with sensible default based on UPM
    pub fn ascender_or_default(&self) -> f64 {
        self.ascender.unwrap_or(self.units_per_em * 0.8)
    }

    /// Get descender value with sensible default based on UPM
    pub fn descender_or_default(&self) -> f64 {
        self.descender.unwrap_or(-(self.units_per_em * 0.2))
    }

    /// Get default left side bearing, 3% of UPM when unset
    pub fn left_bearing_or_default(&self) -> f64 {
        self.default_left_bearing
            .unwrap_or(self.units_per_em * 0.03)
    }

    /// Get default right side bearing, 3% of UPM when unset
    pub fn right_bearing_or_default(&self) -> f64 {
        self.default_right_bearing
            .unwrap_or(self.units_per_em * 0.03)
    }

    /// Get default stroke width, 4% of UPM when unset
    pub fn stroke_width_or_default(&self) -> f64 {
        self.default_stroke_width
            .unwrap_or(self.units_per_em * 0.04)
    }
}
