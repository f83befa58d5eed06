//! Default offset heuristics
//!
//! Where does a mark sit on a base when the author has not said otherwise?
//! The answer comes from an ordered chain of resolvers, first match wins:
//!
//! 1. Indic positional category of the mark codepoint
//! 2. Canonical combining class of the mark codepoint
//! 3. Manually authored anchor rules (literal names or group references)
//! 4. Side-by-side placement from side bearings
//!
//! Tiers 1-3 produce an [`AnchorRule`]; the offset then aligns the chosen
//! bounding-box anchors and applies the rule's nudge. Tier 4 skips anchors
//! entirely and lines the glyphs up like ordinary spacing neighbors.

use icu_properties::props::CanonicalCombiningClass;
use kurbo::{Rect, Vec2};

use crate::core::config::{ManualAnchorRule, MovementConstraint, PositioningRule, ProjectSnapshot};
use crate::data::character::CharacterRecord;
use crate::font_source::metrics::FontMetrics;
use crate::geometry::attach_point::AttachPoint;
use crate::geometry::utilities::constrain_offset;
use crate::positioning::groups::expand_members;
use crate::positioning::unicode::{combining_class, indic_position, IndicPosition};

/// Distance marks are nudged toward or away from their base, in design units
const NUDGE: f64 = 50.0;

/// An anchor pairing with a fixed adjustment
///
/// The resulting offset aligns `base_point` on the base's box with
/// `mark_point` on the mark's box, then shifts by `nudge`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRule {
    pub base_point: AttachPoint,
    pub mark_point: AttachPoint,
    pub nudge: Vec2,
}

impl AnchorRule {
    const fn new(base_point: AttachPoint, mark_point: AttachPoint, dx: f64, dy: f64) -> Self {
        Self {
            base_point,
            mark_point,
            nudge: Vec2::new(dx, dy),
        }
    }
}

/// Tier 1: Indic positional category, nudged toward the base
fn indic_tier(mark: &CharacterRecord) -> Option<AnchorRule> {
    let c = mark.codepoint.and_then(char::from_u32)?;
    use AttachPoint::*;
    let rule = match indic_position(c)? {
        IndicPosition::Top => AnchorRule::new(Top, Bottom, 0.0, -NUDGE),
        IndicPosition::Bottom => AnchorRule::new(Bottom, Top, 0.0, NUDGE),
        IndicPosition::Left => AnchorRule::new(Left, Right, NUDGE, 0.0),
        IndicPosition::Right => AnchorRule::new(Right, Left, -NUDGE, 0.0),
    };
    Some(rule)
}

/// Fixed decision table for tier 2
///
/// Attached classes carry no nudge; spacing classes are pushed ~50 units in
/// their natural direction so the mark clears the base's stroke.
static CCC_TABLE: [(CanonicalCombiningClass, AnchorRule); 20] = {
    use AttachPoint::*;
    use CanonicalCombiningClass as Ccc;
    [
        (Ccc::Overlay, AnchorRule::new(Top, Top, 0.0, 0.0)),
        (Ccc::HanReading, AnchorRule::new(Right, Left, NUDGE, 0.0)),
        (Ccc::Nukta, AnchorRule::new(Bottom, Top, 0.0, 0.0)),
        (Ccc::KanaVoicing, AnchorRule::new(TopRight, BottomLeft, 0.0, 0.0)),
        (Ccc::Virama, AnchorRule::new(Bottom, Top, 0.0, 0.0)),
        (Ccc::AttachedBelowLeft, AnchorRule::new(BottomLeft, TopRight, 0.0, 0.0)),
        (Ccc::AttachedBelow, AnchorRule::new(Bottom, Top, 0.0, 0.0)),
        (Ccc::AttachedAbove, AnchorRule::new(Top, Bottom, 0.0, 0.0)),
        (Ccc::AttachedAboveRight, AnchorRule::new(TopRight, BottomLeft, 0.0, 0.0)),
        (Ccc::BelowLeft, AnchorRule::new(BottomLeft, TopRight, 0.0, -NUDGE)),
        (Ccc::Below, AnchorRule::new(Bottom, Top, 0.0, -NUDGE)),
        (Ccc::BelowRight, AnchorRule::new(BottomRight, TopLeft, 0.0, -NUDGE)),
        (Ccc::Left, AnchorRule::new(Left, Right, -NUDGE, 0.0)),
        (Ccc::Right, AnchorRule::new(Right, Left, NUDGE, 0.0)),
        (Ccc::AboveLeft, AnchorRule::new(TopLeft, BottomRight, 0.0, NUDGE)),
        (Ccc::Above, AnchorRule::new(Top, Bottom, 0.0, NUDGE)),
        (Ccc::AboveRight, AnchorRule::new(TopRight, BottomLeft, 0.0, NUDGE)),
        (Ccc::DoubleBelow, AnchorRule::new(Bottom, Top, 0.0, -NUDGE)),
        (Ccc::DoubleAbove, AnchorRule::new(Top, Bottom, 0.0, NUDGE)),
        (Ccc::IotaSubscript, AnchorRule::new(Bottom, Top, 0.0, -NUDGE)),
    ]
};

/// Tier 2: canonical combining class
///
/// Combining marks whose class is not tabulated (the fixed-position
/// mid-range) get a generic top-center attached rule; class 0 means the
/// codepoint is not a reordering mark and the tier has no opinion.
fn combining_class_tier(mark: &CharacterRecord) -> Option<AnchorRule> {
    let c = mark.codepoint.and_then(char::from_u32)?;
    let ccc = combining_class(c);
    if ccc == CanonicalCombiningClass::NotReordered {
        return None;
    }
    let tabulated = CCC_TABLE
        .iter()
        .find(|(class, _)| *class == ccc)
        .map(|(_, rule)| *rule);
    Some(tabulated.unwrap_or(AnchorRule::new(
        AttachPoint::Top,
        AttachPoint::Bottom,
        0.0,
        0.0,
    )))
}

/// Whether an authored name-or-group entry covers a glyph name
fn entry_covers(entry: &str, name: &str, snapshot: &ProjectSnapshot) -> bool {
    if entry.starts_with('$') || entry.starts_with('@') {
        let item = [entry.to_string()];
        expand_members(&item, &snapshot.groups).iter().any(|m| m == name)
    } else {
        entry == name
    }
}

/// Tier 3: manually authored anchor rules
fn manual_tier(
    base: &CharacterRecord,
    mark: &CharacterRecord,
    snapshot: &ProjectSnapshot,
) -> Option<AnchorRule> {
    snapshot
        .anchor_rules
        .iter()
        .find(|rule| {
            entry_covers(&rule.base, &base.name, snapshot)
                && entry_covers(&rule.mark, &mark.name, snapshot)
        })
        .map(|rule: &ManualAnchorRule| AnchorRule {
            base_point: rule.base_point,
            mark_point: rule.mark_point,
            nudge: Vec2::new(rule.dx, rule.dy),
        })
}

/// The positioning rule governing a (base, mark) pair, if any
pub fn rule_for_pair<'a>(
    base: &str,
    mark: &str,
    snapshot: &'a ProjectSnapshot,
) -> Option<&'a PositioningRule> {
    snapshot.rules.iter().find(|rule| {
        rule.bases.iter().any(|e| entry_covers(e, base, snapshot))
            && rule.marks.iter().any(|e| entry_covers(e, mark, snapshot))
    })
}

/// Movement constraint of the pair's governing rule, `None` when unruled
pub fn constraint_for_pair(base: &str, mark: &str, snapshot: &ProjectSnapshot) -> MovementConstraint {
    rule_for_pair(base, mark, snapshot)
        .map(|rule| rule.movement)
        .unwrap_or_default()
}

/// Compute the default offset of `mark` relative to `base`
///
/// Runs the tier chain and converts the winning anchor rule into a
/// translation, or falls back to side-by-side placement. Missing geometry
/// on either side yields `(0, 0)`.
pub fn default_offset(
    base: &CharacterRecord,
    mark: &CharacterRecord,
    base_bbox: Option<Rect>,
    mark_bbox: Option<Rect>,
    snapshot: &ProjectSnapshot,
    metrics: &FontMetrics,
    constraint: MovementConstraint,
) -> Vec2 {
    let (Some(base_bbox), Some(mark_bbox)) = (base_bbox, mark_bbox) else {
        return Vec2::ZERO;
    };

    let anchor = indic_tier(mark)
        .or_else(|| combining_class_tier(mark))
        .or_else(|| manual_tier(base, mark, snapshot));

    let offset = match anchor {
        Some(rule) => {
            rule.base_point.point_on(base_bbox).to_vec2() + rule.nudge
                - rule.mark_point.point_on(mark_bbox).to_vec2()
        }
        None => side_by_side(base, mark, base_bbox, mark_bbox, metrics),
    };

    constrain_offset(offset, constraint)
}

/// Tier 4: place the mark just past the base's right side bearing
fn side_by_side(
    base: &CharacterRecord,
    mark: &CharacterRecord,
    base_bbox: Rect,
    mark_bbox: Rect,
    metrics: &FontMetrics,
) -> Vec2 {
    let base_rsb = base
        .right_bearing
        .unwrap_or_else(|| metrics.right_bearing_or_default());
    let mark_lsb = mark
        .left_bearing
        .unwrap_or_else(|| metrics.left_bearing_or_default());
    let x = base_bbox.max_x() + base_rsb + mark_lsb - mark_bbox.min_x();
    Vec2::new(x, 0.0)
}
