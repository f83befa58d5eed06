//! Character records and the character set
//!
//! A character is the authoring-side identity of a glyph: its name, its
//! optional codepoint, spacing metadata and classification. The engine
//! reads characters to key the positioning map and writes back metadata on
//! edited ligatures.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::config::GlyphPair;

/// Classification of a glyph within the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphClass {
    #[default]
    Base,
    Mark,
    Ligature,
    /// Placeholder glyph with no drawn geometry of its own
    Virtual,
}

/// One authored character
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    /// Absent for private-use-only glyphs
    #[serde(default)]
    pub codepoint: Option<u32>,
    #[serde(default)]
    pub left_bearing: Option<f64>,
    #[serde(default)]
    pub right_bearing: Option<f64>,
    #[serde(default)]
    pub advance_width: Option<f64>,
    #[serde(default)]
    pub glyph_class: GlyphClass,
    /// For ligatures: the (base, mark) pair this glyph is baked from
    #[serde(default)]
    pub composition: Option<GlyphPair>,
    /// GPOS feature tag hint
    #[serde(default)]
    pub gpos: Option<String>,
    /// GSUB feature tag hint
    #[serde(default)]
    pub gsub: Option<String>,
    /// Kerning group hint
    #[serde(default)]
    pub kern_group: Option<String>,
}

impl CharacterRecord {
    pub fn new(name: impl Into<String>, codepoint: Option<u32>) -> Self {
        Self {
            name: name.into(),
            codepoint,
            ..Default::default()
        }
    }
}

/// Metadata an author confirms together with a position edit
///
/// Applied to the edited ligature only; metadata never cascades.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LigatureMetadata {
    #[serde(default)]
    pub left_bearing: Option<f64>,
    #[serde(default)]
    pub right_bearing: Option<f64>,
    #[serde(default)]
    pub advance_width: Option<f64>,
    #[serde(default)]
    pub glyph_class: Option<GlyphClass>,
    #[serde(default)]
    pub gpos: Option<String>,
    #[serde(default)]
    pub gsub: Option<String>,
}

impl LigatureMetadata {
    /// True when the author asked for no metadata changes at all
    pub fn is_empty(&self) -> bool {
        self.left_bearing.is_none()
            && self.right_bearing.is_none()
            && self.advance_width.is_none()
            && self.glyph_class.is_none()
            && self.gpos.is_none()
            && self.gsub.is_none()
    }

    /// Write the requested fields onto a character record
    pub fn apply_to(&self, record: &mut CharacterRecord) {
        if let Some(lsb) = self.left_bearing {
            record.left_bearing = Some(lsb);
        }
        if let Some(rsb) = self.right_bearing {
            record.right_bearing = Some(rsb);
        }
        if let Some(advance) = self.advance_width {
            record.advance_width = Some(advance);
        }
        if let Some(class) = self.glyph_class {
            record.glyph_class = class;
        }
        if let Some(gpos) = &self.gpos {
            record.gpos = Some(gpos.clone());
        }
        if let Some(gsub) = &self.gsub {
            record.gsub = Some(gsub.clone());
        }
    }
}

/// All characters of the project, indexed by name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterSet {
    characters: HashMap<String, CharacterRecord>,
}

impl CharacterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: CharacterRecord) {
        self.characters.insert(record.name.clone(), record);
    }

    pub fn get(&self, name: &str) -> Option<&CharacterRecord> {
        self.characters.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut CharacterRecord> {
        self.characters.get_mut(name)
    }

    /// Codepoint of a named character, if it has one
    pub fn codepoint_of(&self, name: &str) -> Option<u32> {
        self.characters.get(name).and_then(|c| c.codepoint)
    }

    /// The ligature record baked from a (base, mark) pair, if authored
    pub fn ligature_for(&self, base: &str, mark: &str) -> Option<&CharacterRecord> {
        self.characters.values().find(|c| {
            c.composition
                .as_ref()
                .is_some_and(|pair| pair.matches(base, mark))
        })
    }

    /// Mutable variant of [`Self::ligature_for`]
    pub fn ligature_for_mut(&mut self, base: &str, mark: &str) -> Option<&mut CharacterRecord> {
        self.characters.values_mut().find(|c| {
            c.composition
                .as_ref()
                .is_some_and(|pair| pair.matches(base, mark))
        })
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_applies_only_requested_fields() {
        let mut record = CharacterRecord::new("ka_virama", Some(0xE0A1));
        record.left_bearing = Some(30.0);

        let metadata = LigatureMetadata {
            right_bearing: Some(25.0),
            glyph_class: Some(GlyphClass::Ligature),
            ..Default::default()
        };
        metadata.apply_to(&mut record);

        assert_eq!(record.left_bearing, Some(30.0), "untouched field survives");
        assert_eq!(record.right_bearing, Some(25.0));
        assert_eq!(record.glyph_class, GlyphClass::Ligature);
    }

    #[test]
    fn ligature_lookup_by_composition() {
        let mut set = CharacterSet::new();
        set.insert(CharacterRecord::new("ka", Some(0x0915)));
        let mut liga = CharacterRecord::new("ka_virama", Some(0xE0A1));
        liga.composition = Some(GlyphPair::new("ka", "virama"));
        set.insert(liga);

        assert_eq!(
            set.ligature_for("ka", "virama").map(|c| c.name.as_str()),
            Some("ka_virama")
        );
        assert!(set.ligature_for("kha", "virama").is_none());
    }
}
