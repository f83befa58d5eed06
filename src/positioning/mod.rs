//! Mark positioning core
//!
//! This module contains the positioning decision procedure and its
//! propagation machinery:
//! - Group expansion for symbolic member lists
//! - Unicode metadata lookups for combining marks
//! - The tiered default-offset heuristic chain
//! - Attachment class resolution with pair-relative leadership
//! - The cascade engine that replicates confirmed edits to class siblings

pub mod cascade;
pub mod classes;
pub mod groups;
pub mod heuristics;
pub mod map;
pub mod snapshot;
pub mod unicode;

// Re-export commonly used items
pub use cascade::{apply_edit_and_cascade, CascadeContext, CascadeSummary, EditState, PairEdit};
pub use classes::{leader_for_counterpart, resolve_pair, side_classes, PairResolution};
pub use groups::expand_members;
pub use heuristics::{constraint_for_pair, default_offset, rule_for_pair, AnchorRule};
pub use map::MarkPositioningMap;
pub use snapshot::EditSnapshot;
pub use unicode::{combining_class, indic_position, IndicPosition};
