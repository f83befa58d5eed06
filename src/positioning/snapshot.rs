//! Caller-owned edit snapshots
//!
//! The cascade engine is stateless across calls, so undo is structural:
//! capture the three mutable structures before invoking, restore them
//! verbatim to abandon the edit. There is no internal history log.

use crate::data::character::CharacterSet;
use crate::data::store::GlyphOutlineStore;
use crate::positioning::cascade::EditState;
use crate::positioning::map::MarkPositioningMap;

/// Verbatim copy of everything one cascade may touch
#[derive(Debug, Clone)]
pub struct EditSnapshot {
    positions: MarkPositioningMap,
    outlines: GlyphOutlineStore,
    characters: CharacterSet,
}

impl EditSnapshot {
    /// Capture the current state of the mutable structures
    pub fn capture(state: &EditState<'_>) -> Self {
        Self {
            positions: state.positions.clone(),
            outlines: state.outlines.clone(),
            characters: state.characters.clone(),
        }
    }

    /// Put everything back exactly as captured
    pub fn restore(&self, state: &mut EditState<'_>) {
        *state.positions = self.positions.clone();
        *state.outlines = self.outlines.clone();
        *state.characters = self.characters.clone();
    }
}
