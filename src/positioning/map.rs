//! The mark positioning map
//!
//! Sparse map from (base codepoint, mark codepoint) to a confirmed offset.
//! Absence of a pair means "use the computed default". The engine only
//! ever adds or overwrites entries; clearing an entry back to default is
//! an editing-session affair.

use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Confirmed mark offsets keyed by (base, mark) codepoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkPositioningMap {
    entries: HashMap<(u32, u32), Vec2>,
}

impl MarkPositioningMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, base: u32, mark: u32) -> Option<Vec2> {
        self.entries.get(&(base, mark)).copied()
    }

    pub fn insert(&mut self, base: u32, mark: u32, offset: Vec2) {
        self.entries.insert((base, mark), offset);
    }

    pub fn contains(&self, base: u32, mark: u32) -> bool {
        self.entries.contains_key(&(base, mark))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(u32, u32), &Vec2)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
