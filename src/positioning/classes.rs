//! Attachment class resolution
//!
//! Attachment classes declare that a set of glyphs should stay visually
//! consistent as mark carriers (base side) or as marks (mark side). For a
//! concrete pair the resolver decides which class governs it, who the
//! class leader is *for that pair*, and whether the pair is positioned
//! independently.
//!
//! Leadership is pair-relative on purpose: it is always recomputed from
//! (class, counterpart), never stored, so it stays correct when the
//! author edits `except_pairs`.

use tracing::warn;

use crate::core::config::{AttachmentClass, ClassSide, ProjectSnapshot};
use crate::positioning::groups::expand_members;

/// How a (base, mark) pair relates to the configured attachment classes
#[derive(Debug, Clone)]
pub struct PairResolution<'a> {
    /// The class governing this pair, if any
    pub class: Option<&'a AttachmentClass>,
    /// Which side the governing class lives on
    pub side: Option<ClassSide>,
    /// Whether this pair's governed glyph is the class leader for this pair
    pub is_leader_for_pair: bool,
    /// Whether the pair is positioned independently of any class
    pub is_independent: bool,
}

/// First class in `classes` whose members contain `glyph` and whose
/// filters accept `counterpart`
fn matching_class<'a>(
    classes: &'a [AttachmentClass],
    glyph: &str,
    counterpart: &str,
    snapshot: &ProjectSnapshot,
) -> Option<&'a AttachmentClass> {
    classes.iter().find(|class| {
        let members = expand_members(&class.members, &snapshot.groups);
        if members.is_empty() || !members.iter().any(|m| m == glyph) {
            return false;
        }
        if !class.applies.is_empty() {
            let applies = expand_members(&class.applies, &snapshot.groups);
            if !applies.iter().any(|m| m == counterpart) {
                return false;
            }
        }
        if !class.exceptions.is_empty() {
            let exceptions = expand_members(&class.exceptions, &snapshot.groups);
            if exceptions.iter().any(|m| m == counterpart) {
                return false;
            }
        }
        true
    })
}

/// The class leader for the pair whose counterpart glyph is given
///
/// The leader is the first expanded member whose substitution into the
/// pair is not opted out via `except_pairs`. When every member is excepted
/// the first member stands in, which keeps the class functional but is
/// worth telling the author about.
pub fn leader_for_counterpart(
    class: &AttachmentClass,
    side: ClassSide,
    counterpart: &str,
    snapshot: &ProjectSnapshot,
) -> Option<String> {
    let members = expand_members(&class.members, &snapshot.groups);
    let leader = members.iter().find(|member| match side {
        ClassSide::Mark => !class.excepts_pair(counterpart, member),
        ClassSide::Base => !class.excepts_pair(member, counterpart),
    });
    match leader {
        Some(name) => Some(name.clone()),
        None => {
            let first = members.first().cloned();
            if first.is_some() {
                warn!(
                    "Every member of class '{}' is excepted for counterpart '{counterpart}'; \
                     falling back to the first member",
                    class.name
                );
            }
            first
        }
    }
}

/// The first matching class on each side of a pair, mark side then base side
///
/// The cascade engine needs both sides at once: siblings are gathered from
/// each side's class independently, while leadership and reporting follow
/// the single class [`resolve_pair`] picks.
pub fn side_classes<'a>(
    base: &str,
    mark: &str,
    snapshot: &'a ProjectSnapshot,
) -> (Option<&'a AttachmentClass>, Option<&'a AttachmentClass>) {
    (
        matching_class(&snapshot.mark_classes, mark, base, snapshot),
        matching_class(&snapshot.base_classes, base, mark, snapshot),
    )
}

/// Resolve which attachment class governs a (base, mark) pair
///
/// `side_override` lets the editing session pin one side explicitly; it
/// only takes effect when a class actually resolved on that side.
/// Otherwise a matching mark-class always wins over a matching base-class.
pub fn resolve_pair<'a>(
    base: &str,
    mark: &str,
    snapshot: &'a ProjectSnapshot,
    side_override: Option<ClassSide>,
) -> PairResolution<'a> {
    let mark_class = matching_class(&snapshot.mark_classes, mark, base, snapshot);
    let base_class = matching_class(&snapshot.base_classes, base, mark, snapshot);

    let chosen = match side_override {
        Some(ClassSide::Mark) if mark_class.is_some() => {
            mark_class.map(|class| (class, ClassSide::Mark))
        }
        Some(ClassSide::Base) if base_class.is_some() => {
            base_class.map(|class| (class, ClassSide::Base))
        }
        _ => mark_class
            .map(|class| (class, ClassSide::Mark))
            .or_else(|| base_class.map(|class| (class, ClassSide::Base))),
    };

    let Some((active, side)) = chosen else {
        return PairResolution {
            class: None,
            side: None,
            is_leader_for_pair: false,
            is_independent: true,
        };
    };

    let (governed, counterpart) = match side {
        ClassSide::Mark => (mark, base),
        ClassSide::Base => (base, mark),
    };
    let leader = leader_for_counterpart(active, side, counterpart, snapshot);
    let is_leader = leader.as_deref() == Some(governed);

    PairResolution {
        class: Some(active),
        side: Some(side),
        is_leader_for_pair: is_leader,
        is_independent: active.excepts_pair(base, mark),
    }
}
