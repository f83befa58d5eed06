//! Cross-module cascade scenarios
//!
//! Module-level behavior is covered next to each module; these tests walk
//! whole edit-and-cascade transactions through realistic project state.

#[cfg(test)]
mod cascade_tests {
    use kurbo::Vec2;

    use crate::core::config::{
        AttachmentClass, GlyphPair, MovementConstraint, PositioningRule, ProjectSnapshot,
    };
    use crate::data::character::{CharacterRecord, CharacterSet, GlyphClass, LigatureMetadata};
    use crate::data::outline::{Contour, ContourPoint, GlyphOutline, PointKind};
    use crate::data::store::GlyphOutlineStore;
    use crate::font_source::metrics::FontMetrics;
    use crate::geometry::bbox::StrokeBounds;
    use crate::positioning::cascade::{
        apply_edit_and_cascade, CascadeContext, EditState, PairEdit,
    };
    use crate::positioning::heuristics::{constraint_for_pair, default_offset};
    use crate::positioning::map::MarkPositioningMap;
    use crate::positioning::snapshot::EditSnapshot;

    const KA: u32 = 0x0915;
    const KHA: u32 = 0x0916;
    const VIRAMA: u32 = 0x094D;
    const NUKTA: u32 = 0x093C;
    const KA_VIRAMA: u32 = 0xE0A1;

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

    /// Zero-stroke metrics so bounding boxes equal the drawn boxes exactly
    fn metrics() -> FontMetrics {
        FontMetrics {
            units_per_em: 1000.0,
            default_stroke_width: Some(0.0),
            ..Default::default()
        }
    }

    fn characters() -> CharacterSet {
        let mut set = CharacterSet::new();
        for (name, cp, class) in [
            ("ka", KA, GlyphClass::Base),
            ("kha", KHA, GlyphClass::Base),
            ("virama", VIRAMA, GlyphClass::Mark),
            ("nukta", NUKTA, GlyphClass::Mark),
        ] {
            let mut record = CharacterRecord::new(name, Some(cp));
            record.glyph_class = class;
            set.insert(record);
        }
        let mut liga = CharacterRecord::new("ka_virama", Some(KA_VIRAMA));
        liga.glyph_class = GlyphClass::Ligature;
        liga.composition = Some(GlyphPair::new("ka", "virama"));
        set.insert(liga);
        set
    }

    fn outlines() -> GlyphOutlineStore {
        let mut store = GlyphOutlineStore::new();
        store.insert(KA, box_outline(0.0, 0.0, 100.0, 200.0));
        store.insert(KHA, box_outline(0.0, 0.0, 140.0, 180.0));
        store.insert(VIRAMA, box_outline(0.0, -40.0, 30.0, 0.0));
        store.insert(NUKTA, box_outline(0.0, -20.0, 20.0, 0.0));
        store
    }

    /// Base class over ka and kha; virama stays classless
    fn snapshot_with_base_class() -> ProjectSnapshot {
        let mut snapshot = ProjectSnapshot::default();
        snapshot.base_classes.push(AttachmentClass {
            name: "consonants".into(),
            members: vec!["ka".into(), "kha".into()],
            ..Default::default()
        });
        snapshot
    }

    fn edit(base: &str, mark: &str, offset: Vec2) -> PairEdit {
        PairEdit {
            base: base.into(),
            mark: mark.into(),
            offset,
            metadata: None,
        }
    }

    #[test]
    fn base_class_sibling_receives_the_delta() {
        let snapshot = snapshot_with_base_class();
        let metrics = metrics();
        let mut positions = MarkPositioningMap::new();
        let mut outlines = outlines();
        let mut characters = characters();

        // The sibling's own default, computed exactly as the engine will
        let expected_sibling_default = default_offset(
            characters.get("kha").unwrap(),
            characters.get("virama").unwrap(),
            outlines.bounds(KHA, &StrokeBounds, 0.0),
            outlines.bounds(VIRAMA, &StrokeBounds, 0.0),
            &snapshot,
            &metrics,
            constraint_for_pair("kha", "virama", &snapshot),
        );
        let edited_default = default_offset(
            characters.get("ka").unwrap(),
            characters.get("virama").unwrap(),
            outlines.bounds(KA, &StrokeBounds, 0.0),
            outlines.bounds(VIRAMA, &StrokeBounds, 0.0),
            &snapshot,
            &metrics,
            constraint_for_pair("ka", "virama", &snapshot),
        );

        let confirmed = edited_default + Vec2::new(10.0, -5.0);
        let mut state = EditState {
            positions: &mut positions,
            outlines: &mut outlines,
            characters: &mut characters,
        };
        let ctx = CascadeContext {
            snapshot: &snapshot,
            metrics: &metrics,
            bbox: &StrokeBounds,
            side_override: None,
        };
        let summary =
            apply_edit_and_cascade(&edit("ka", "virama", confirmed), &mut state, &ctx).unwrap();

        assert_eq!(summary.propagated, 1);
        assert_eq!(positions.get(KA, VIRAMA), Some(confirmed));
        assert_eq!(
            positions.get(KHA, VIRAMA),
            Some(expected_sibling_default + Vec2::new(10.0, -5.0)),
            "sibling gets its own default plus the author's delta"
        );
    }

    #[test]
    fn cascade_is_idempotent() {
        let snapshot = snapshot_with_base_class();
        let metrics = metrics();
        let mut positions = MarkPositioningMap::new();
        let mut outlines = outlines();
        let mut characters = characters();

        let the_edit = edit("ka", "virama", Vec2::new(42.0, 17.0));
        let ctx = CascadeContext {
            snapshot: &snapshot,
            metrics: &metrics,
            bbox: &StrokeBounds,
            side_override: None,
        };

        let mut state = EditState {
            positions: &mut positions,
            outlines: &mut outlines,
            characters: &mut characters,
        };
        apply_edit_and_cascade(&the_edit, &mut state, &ctx).unwrap();
        let after_once = positions.clone();

        let mut state = EditState {
            positions: &mut positions,
            outlines: &mut outlines,
            characters: &mut characters,
        };
        apply_edit_and_cascade(&the_edit, &mut state, &ctx).unwrap();

        assert_eq!(positions, after_once);
    }

    #[test]
    fn excepted_pair_neither_cascades_nor_receives() {
        let mut snapshot = ProjectSnapshot::default();
        snapshot.mark_classes.push(AttachmentClass {
            name: "below-marks".into(),
            members: vec!["nukta".into(), "virama".into()],
            except_pairs: vec![GlyphPair::new("ka", "nukta")],
            ..Default::default()
        });
        let metrics = metrics();
        let mut positions = MarkPositioningMap::new();
        let mut outlines = outlines();
        let mut characters = characters();
        let ctx = CascadeContext {
            snapshot: &snapshot,
            metrics: &metrics,
            bbox: &StrokeBounds,
            side_override: None,
        };

        // Editing the excepted pair must not touch any sibling.
        let mut state = EditState {
            positions: &mut positions,
            outlines: &mut outlines,
            characters: &mut characters,
        };
        let summary =
            apply_edit_and_cascade(&edit("ka", "nukta", Vec2::new(7.0, 7.0)), &mut state, &ctx)
                .unwrap();
        assert_eq!(summary.propagated, 0);
        assert_eq!(positions.len(), 1);

        // A sibling edit must not overwrite the excepted pair's value.
        let mut state = EditState {
            positions: &mut positions,
            outlines: &mut outlines,
            characters: &mut characters,
        };
        apply_edit_and_cascade(&edit("ka", "virama", Vec2::new(3.0, 3.0)), &mut state, &ctx)
            .unwrap();
        assert_eq!(
            positions.get(KA, NUKTA),
            Some(Vec2::new(7.0, 7.0)),
            "except-pair entries are never synchronized"
        );
    }

    #[test]
    fn gsub_pair_bakes_and_gpos_pair_does_not() {
        let mut snapshot = snapshot_with_base_class();
        snapshot.rules.push(PositioningRule {
            bases: vec!["ka".into()],
            marks: vec!["virama".into()],
            gpos: Some("blwm".into()),
            gsub: Some("akhn".into()),
            movement: MovementConstraint::None,
        });
        snapshot.rules.push(PositioningRule {
            bases: vec!["kha".into()],
            marks: vec!["virama".into()],
            gpos: Some("blwm".into()),
            gsub: None,
            movement: MovementConstraint::None,
        });

        let metrics = metrics();
        let mut positions = MarkPositioningMap::new();
        let mut outlines = outlines();
        let mut characters = characters();
        let confirmed = Vec2::new(35.0, -60.0);

        let mut state = EditState {
            positions: &mut positions,
            outlines: &mut outlines,
            characters: &mut characters,
        };
        let ctx = CascadeContext {
            snapshot: &snapshot,
            metrics: &metrics,
            bbox: &StrokeBounds,
            side_override: None,
        };
        let summary =
            apply_edit_and_cascade(&edit("ka", "virama", confirmed), &mut state, &ctx).unwrap();

        assert_eq!(summary.baked, 1, "only the GSUB pair bakes");
        let baked = outlines.get(KA_VIRAMA).expect("ligature outline cached");
        assert_eq!(baked.contours.len(), 2);
        // Base contour verbatim, mark contour translated by the final offset
        assert_eq!(baked.contours[0], outlines.get(KA).unwrap().contours[0]);
        assert_eq!(
            baked.contours[1],
            outlines.get(VIRAMA).unwrap().contours[0].translated(confirmed)
        );

        // The GPOS-only sibling updated its map entry but no outline.
        assert!(positions.contains(KHA, VIRAMA));
        assert_eq!(outlines.len(), 5, "only the one ligature entry was added");
    }

    #[test]
    fn metadata_lands_on_the_edited_ligature_only() {
        let snapshot = snapshot_with_base_class();
        let metrics = metrics();
        let mut positions = MarkPositioningMap::new();
        let mut outlines = outlines();
        let mut characters = characters();

        let mut state = EditState {
            positions: &mut positions,
            outlines: &mut outlines,
            characters: &mut characters,
        };
        let ctx = CascadeContext {
            snapshot: &snapshot,
            metrics: &metrics,
            bbox: &StrokeBounds,
            side_override: None,
        };
        let the_edit = PairEdit {
            base: "ka".into(),
            mark: "virama".into(),
            offset: Vec2::new(5.0, 5.0),
            metadata: Some(LigatureMetadata {
                advance_width: Some(130.0),
                gpos: Some("blwm".into()),
                ..Default::default()
            }),
        };
        apply_edit_and_cascade(&the_edit, &mut state, &ctx).unwrap();

        let liga = characters.get("ka_virama").unwrap();
        assert_eq!(liga.advance_width, Some(130.0));
        assert_eq!(liga.gpos.as_deref(), Some("blwm"));
        assert_eq!(
            characters.get("kha").unwrap().advance_width,
            None,
            "metadata never cascades"
        );
    }

    #[test]
    fn missing_edited_geometry_is_fatal() {
        let snapshot = snapshot_with_base_class();
        let metrics = metrics();
        let mut positions = MarkPositioningMap::new();
        let mut outlines = outlines();
        let mut characters = characters();
        // A mark that exists as a record but has never been drawn
        characters.insert(CharacterRecord::new("candra", Some(0x0945)));

        let mut state = EditState {
            positions: &mut positions,
            outlines: &mut outlines,
            characters: &mut characters,
        };
        let ctx = CascadeContext {
            snapshot: &snapshot,
            metrics: &metrics,
            bbox: &StrokeBounds,
            side_override: None,
        };
        let result =
            apply_edit_and_cascade(&edit("ka", "candra", Vec2::new(1.0, 1.0)), &mut state, &ctx);
        assert!(result.is_err());
    }

    #[test]
    fn sibling_without_geometry_is_skipped_not_fatal() {
        let mut snapshot = snapshot_with_base_class();
        snapshot.base_classes[0].members.push("gha".into());
        let metrics = metrics();
        let mut positions = MarkPositioningMap::new();
        let mut outlines = outlines();
        let mut characters = characters();
        // gha is registered but not drawn yet
        characters.insert(CharacterRecord::new("gha", Some(0x0918)));

        let mut state = EditState {
            positions: &mut positions,
            outlines: &mut outlines,
            characters: &mut characters,
        };
        let ctx = CascadeContext {
            snapshot: &snapshot,
            metrics: &metrics,
            bbox: &StrokeBounds,
            side_override: None,
        };
        let summary =
            apply_edit_and_cascade(&edit("ka", "virama", Vec2::new(2.0, 2.0)), &mut state, &ctx)
                .unwrap();

        assert_eq!(summary.propagated, 1, "kha updates, gha is skipped");
        assert!(!positions.contains(0x0918, VIRAMA));
    }

    #[test]
    fn snapshot_restore_reverts_a_cascade() {
        let mut snapshot_cfg = snapshot_with_base_class();
        snapshot_cfg.rules.push(PositioningRule {
            bases: vec!["ka".into()],
            marks: vec!["virama".into()],
            gsub: Some("akhn".into()),
            ..Default::default()
        });
        let metrics = metrics();
        let mut positions = MarkPositioningMap::new();
        let mut outlines = outlines();
        let mut characters = characters();

        let mut state = EditState {
            positions: &mut positions,
            outlines: &mut outlines,
            characters: &mut characters,
        };
        let before = EditSnapshot::capture(&state);
        let ctx = CascadeContext {
            snapshot: &snapshot_cfg,
            metrics: &metrics,
            bbox: &StrokeBounds,
            side_override: None,
        };
        let the_edit = PairEdit {
            base: "ka".into(),
            mark: "virama".into(),
            offset: Vec2::new(9.0, -9.0),
            metadata: Some(LigatureMetadata {
                left_bearing: Some(11.0),
                ..Default::default()
            }),
        };
        apply_edit_and_cascade(&the_edit, &mut state, &ctx).unwrap();
        assert!(!positions.is_empty());

        let mut state = EditState {
            positions: &mut positions,
            outlines: &mut outlines,
            characters: &mut characters,
        };
        before.restore(&mut state);

        assert!(positions.is_empty());
        assert!(outlines.get(KA_VIRAMA).is_none());
        assert_eq!(characters.get("ka_virama").unwrap().left_bearing, None);
    }
}
