//! Project configuration snapshot
//!
//! Groups, positioning rules, attachment classes and manual anchor rules
//! are authored in the editing front end and handed to the engine as a
//! read-only snapshot per invocation. The front end ships them as JSON;
//! every field is optional there and defaults to empty here, so a partial
//! project configuration is never a parse error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::errors::KalamResult;
use crate::geometry::attach_point::AttachPoint;

/// Restriction on which axis of a pair's offset may vary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementConstraint {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Which side of a (base, mark) pair an attachment class governs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassSide {
    Mark,
    Base,
}

/// A (base, mark) glyph-name pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlyphPair {
    pub base: String,
    pub mark: String,
}

impl GlyphPair {
    pub fn new(base: impl Into<String>, mark: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            mark: mark.into(),
        }
    }

    /// Check this pair against a pair of glyph names
    pub fn matches(&self, base: &str, mark: &str) -> bool {
        self.base == base && self.mark == mark
    }
}

/// A base-set x mark-set combination carrying OpenType feature tags
///
/// Member entries are literal glyph names or `$`/`@` group references.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositioningRule {
    #[serde(default)]
    pub bases: Vec<String>,
    #[serde(default)]
    pub marks: Vec<String>,
    /// GPOS feature tag, e.g. "abvm"
    #[serde(default)]
    pub gpos: Option<String>,
    /// GSUB feature tag, e.g. "akhn"; presence means the pair bakes a ligature
    #[serde(default)]
    pub gsub: Option<String>,
    #[serde(default)]
    pub movement: MovementConstraint,
}

/// Named equivalence class over glyphs on one side of a pair
///
/// Member order matters: the first member is the default canonical leader.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttachmentClass {
    pub name: String,
    /// Ordered member list; names or group references
    #[serde(default)]
    pub members: Vec<String>,
    /// When non-empty, the class only activates for pairs whose counterpart
    /// glyph is in this set
    #[serde(default)]
    pub applies: Vec<String>,
    /// Pairs whose counterpart glyph is in this set never activate the class
    #[serde(default)]
    pub exceptions: Vec<String>,
    /// Exact pairs opted fully out of the class, positioned independently
    #[serde(default)]
    pub except_pairs: Vec<GlyphPair>,
}

impl AttachmentClass {
    /// Whether the exact (base, mark) pair is opted out of this class
    pub fn excepts_pair(&self, base: &str, mark: &str) -> bool {
        self.except_pairs.iter().any(|p| p.matches(base, mark))
    }
}

/// Manually authored anchor rule, the third heuristic tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualAnchorRule {
    /// Literal base glyph name or group reference
    pub base: String,
    /// Literal mark glyph name or group reference
    pub mark: String,
    pub base_point: AttachPoint,
    pub mark_point: AttachPoint,
    #[serde(default)]
    pub dx: f64,
    #[serde(default)]
    pub dy: f64,
}

/// Read-only bundle of authored configuration passed to the engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    /// Group name → member list (members may reference other groups)
    #[serde(default)]
    pub groups: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub rules: Vec<PositioningRule>,
    #[serde(default)]
    pub mark_classes: Vec<AttachmentClass>,
    #[serde(default)]
    pub base_classes: Vec<AttachmentClass>,
    #[serde(default)]
    pub anchor_rules: Vec<ManualAnchorRule>,
}

impl ProjectSnapshot {
    /// Decode a snapshot from the JSON the front end ships
    pub fn from_json(json: &str) -> KalamResult<Self> {
        let snapshot = serde_json::from_str(json)?;
        Ok(snapshot)
    }
}
