//! Cascade propagation
//!
//! When an author confirms a position edit, the edit's *deviation from the
//! geometric default*, not the absolute offset, replicates to every class
//! sibling. Siblings with different shapes end up looking consistent
//! because each one re-derives its own default from its own geometry and
//! adds the same delta on top.
//!
//! One call is one transaction over the caller-owned mutable structures.
//! The engine holds no state between calls; undo is a caller-side snapshot
//! restore (see [`crate::positioning::snapshot`]).

use anyhow::bail;
use kurbo::Vec2;
use tracing::debug;

use crate::core::config::{AttachmentClass, ClassSide, ProjectSnapshot};
use crate::core::errors::{KalamContext, KalamResult};
use crate::data::character::{CharacterSet, LigatureMetadata};
use crate::data::store::GlyphOutlineStore;
use crate::font_source::metrics::FontMetrics;
use crate::geometry::bbox::BboxProvider;
use crate::geometry::utilities::constrain_offset;
use crate::positioning::classes::{resolve_pair, side_classes};
use crate::positioning::groups::expand_members;
use crate::positioning::heuristics::{constraint_for_pair, default_offset, rule_for_pair};
use crate::positioning::map::MarkPositioningMap;

/// A confirmed author edit on one (base, mark) pair
#[derive(Debug, Clone)]
pub struct PairEdit {
    pub base: String,
    pub mark: String,
    /// The confirmed offset of the mark relative to the base
    pub offset: Vec2,
    /// Metadata to persist on the edited pair's ligature record
    pub metadata: Option<LigatureMetadata>,
}

/// The three caller-owned mutable structures one cascade may touch
#[derive(Debug)]
pub struct EditState<'a> {
    pub positions: &'a mut MarkPositioningMap,
    pub outlines: &'a mut GlyphOutlineStore,
    pub characters: &'a mut CharacterSet,
}

/// Read-only context for one cascade invocation
pub struct CascadeContext<'a> {
    pub snapshot: &'a ProjectSnapshot,
    pub metrics: &'a FontMetrics,
    pub bbox: &'a dyn BboxProvider,
    /// Pins class resolution to one side, when the session asks for it
    pub side_override: Option<ClassSide>,
}

/// What one cascade did, for the "N positions propagated" notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeSummary {
    /// Sibling pairs written in addition to the edited pair
    pub propagated: usize,
    /// Ligature outlines rebaked (edited pair included)
    pub baked: usize,
}

/// Apply one confirmed edit and propagate its delta to all class siblings
///
/// Debounced autosave and explicit confirmation both call this exact
/// function; they differ only in what the caller does with the summary.
///
/// The only fatal condition is an edited pair whose own default cannot be
/// computed: no codepoints to key the map, or no drawn geometry to measure.
/// Sibling pairs missing either are skipped and picked up by a later
/// cascade once they exist.
pub fn apply_edit_and_cascade(
    edit: &PairEdit,
    state: &mut EditState<'_>,
    ctx: &CascadeContext<'_>,
) -> KalamResult<CascadeSummary> {
    let base = state
        .characters
        .get(&edit.base)
        .cloned()
        .with_pair_context("find base character", &edit.base, &edit.mark)?;
    let mark = state
        .characters
        .get(&edit.mark)
        .cloned()
        .with_pair_context("find mark character", &edit.base, &edit.mark)?;
    let base_cp = base
        .codepoint
        .with_pair_context("key the positioning map by base codepoint", &edit.base, &edit.mark)?;
    let mark_cp = mark
        .codepoint
        .with_pair_context("key the positioning map by mark codepoint", &edit.base, &edit.mark)?;

    let stroke = ctx.metrics.stroke_width_or_default();
    let base_bbox = state.outlines.bounds(base_cp, ctx.bbox, stroke);
    let mark_bbox = state.outlines.bounds(mark_cp, ctx.bbox, stroke);
    if base_bbox.is_none() || mark_bbox.is_none() {
        bail!(
            "No drawn geometry for edited pair {}+{}; cannot compute a default to cascade from",
            edit.base,
            edit.mark
        );
    }

    // 1. The author's confirmed offset is recorded unconditionally,
    //    whatever the class situation turns out to be.
    state.positions.insert(base_cp, mark_cp, edit.offset);

    // 2. The propagating delta is the deviation from this pair's own default.
    let constraint = constraint_for_pair(&edit.base, &edit.mark, ctx.snapshot);
    let default = default_offset(
        &base,
        &mark,
        base_bbox,
        mark_bbox,
        ctx.snapshot,
        ctx.metrics,
        constraint,
    );
    let delta = edit.offset - default;

    // 3. Gather siblings per side. The pair's own resolution decides whether
    //    it participates in class synchronization at all.
    let resolution = resolve_pair(&edit.base, &edit.mark, ctx.snapshot, ctx.side_override);
    let (mark_class, base_class) = side_classes(&edit.base, &edit.mark, ctx.snapshot);

    let mut written: Vec<(String, String, u32, u32, Vec2)> = Vec::new();
    let mut propagated = 0usize;

    if !resolution.is_independent {
        let mark_siblings = class_siblings(mark_class, ClassSide::Mark, &edit.base, &edit.mark, ctx.snapshot);
        let base_siblings = class_siblings(base_class, ClassSide::Base, &edit.base, &edit.mark, ctx.snapshot);

        let mut bases = vec![edit.base.clone()];
        bases.extend(base_siblings);
        let mut marks = vec![edit.mark.clone()];
        marks.extend(mark_siblings);

        // 4. Every pair re-derives its own default and receives the delta.
        for sib_base in &bases {
            for sib_mark in &marks {
                if sib_base == &edit.base && sib_mark == &edit.mark {
                    continue;
                }
                if pair_excepted(sib_base, sib_mark, mark_class, base_class) {
                    continue;
                }
                let Some((sib_base_cp, sib_mark_cp, offset)) =
                    sibling_offset(sib_base, sib_mark, delta, state, ctx)
                else {
                    continue;
                };
                state.positions.insert(sib_base_cp, sib_mark_cp, offset);
                written.push((
                    sib_base.clone(),
                    sib_mark.clone(),
                    sib_base_cp,
                    sib_mark_cp,
                    offset,
                ));
                propagated += 1;
            }
        }
    }

    // 5. Rebake composited outlines for GSUB pairs, edited pair first.
    written.insert(
        0,
        (edit.base.clone(), edit.mark.clone(), base_cp, mark_cp, edit.offset),
    );
    let mut baked = 0usize;
    for (pair_base, pair_mark, pair_base_cp, pair_mark_cp, offset) in &written {
        if bake_ligature(pair_base, pair_mark, *pair_base_cp, *pair_mark_cp, *offset, state, ctx) {
            baked += 1;
        }
    }

    // 6. Metadata lands on the edited ligature only, never on siblings.
    if let Some(metadata) = &edit.metadata {
        if !metadata.is_empty() {
            match state.characters.ligature_for_mut(&edit.base, &edit.mark) {
                Some(record) => metadata.apply_to(record),
                None => debug!(
                    "No ligature record for {}+{}; metadata not persisted",
                    edit.base, edit.mark
                ),
            }
        }
    }

    debug!(
        "Cascade from {}+{}: {propagated} positions propagated, {baked} outlines rebaked",
        edit.base, edit.mark
    );
    Ok(CascadeSummary { propagated, baked })
}

/// Expanded class members substitutable into the edited pair
///
/// Members individually excepted for the edited pair's counterpart are
/// left out, as is the edited glyph itself.
fn class_siblings(
    class: Option<&AttachmentClass>,
    side: ClassSide,
    edited_base: &str,
    edited_mark: &str,
    snapshot: &ProjectSnapshot,
) -> Vec<String> {
    let Some(class) = class else {
        return Vec::new();
    };
    let edited = match side {
        ClassSide::Mark => edited_mark,
        ClassSide::Base => edited_base,
    };
    expand_members(&class.members, &snapshot.groups)
        .into_iter()
        .filter(|member| member != edited)
        .filter(|member| match side {
            ClassSide::Mark => !class.excepts_pair(edited_base, member),
            ClassSide::Base => !class.excepts_pair(member, edited_mark),
        })
        .collect()
}

/// Whether either active class opts this exact pair out of synchronization
fn pair_excepted(
    base: &str,
    mark: &str,
    mark_class: Option<&AttachmentClass>,
    base_class: Option<&AttachmentClass>,
) -> bool {
    mark_class.is_some_and(|c| c.excepts_pair(base, mark))
        || base_class.is_some_and(|c| c.excepts_pair(base, mark))
}

/// Final offset for one sibling pair: its own default plus the delta
///
/// Returns `None` when the pair cannot participate yet (missing records,
/// codepoints or geometry); those pairs are re-evaluated by a later
/// cascade once they are drawable.
fn sibling_offset(
    base_name: &str,
    mark_name: &str,
    delta: Vec2,
    state: &EditState<'_>,
    ctx: &CascadeContext<'_>,
) -> Option<(u32, u32, Vec2)> {
    let base = state.characters.get(base_name)?;
    let mark = state.characters.get(mark_name)?;
    let base_cp = base.codepoint?;
    let mark_cp = mark.codepoint?;

    let stroke = ctx.metrics.stroke_width_or_default();
    let base_bbox = state.outlines.bounds(base_cp, ctx.bbox, stroke)?;
    let mark_bbox = state.outlines.bounds(mark_cp, ctx.bbox, stroke)?;

    let constraint = constraint_for_pair(base_name, mark_name, ctx.snapshot);
    let default = default_offset(
        base,
        mark,
        Some(base_bbox),
        Some(mark_bbox),
        ctx.snapshot,
        ctx.metrics,
        constraint,
    );
    Some((base_cp, mark_cp, constrain_offset(default + delta, constraint)))
}

/// Rebake a pair's composited ligature outline when its rule is GSUB
///
/// GPOS-only pairs keep their map entry and nothing else. Baking needs an
/// authored ligature record carrying a codepoint to cache under.
fn bake_ligature(
    base_name: &str,
    mark_name: &str,
    base_cp: u32,
    mark_cp: u32,
    offset: Vec2,
    state: &mut EditState<'_>,
    ctx: &CascadeContext<'_>,
) -> bool {
    let has_gsub = rule_for_pair(base_name, mark_name, ctx.snapshot)
        .is_some_and(|rule| rule.gsub.is_some());
    if !has_gsub {
        return false;
    }
    let Some(ligature_cp) = state
        .characters
        .ligature_for(base_name, mark_name)
        .and_then(|record| record.codepoint)
    else {
        debug!("GSUB pair {base_name}+{mark_name} has no ligature record; not baking");
        return false;
    };
    let Some(base_outline) = state.outlines.get(base_cp).cloned() else {
        return false;
    };
    let Some(mark_outline) = state.outlines.get(mark_cp) else {
        return false;
    };
    let baked = base_outline.merged(&mark_outline.translated(offset));
    state.outlines.insert(ligature_cp, baked);
    true
}
