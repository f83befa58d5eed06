//! Group expansion
//!
//! Authored member lists mix literal glyph names with `$`/`@`-prefixed
//! group references. Expansion flattens them into a deduplicated name list,
//! preserving first-occurrence order because attachment-class leadership
//! depends on member order.

use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Strip a group-reference sigil, if present
fn group_reference(item: &str) -> Option<&str> {
    item.strip_prefix('$').or_else(|| item.strip_prefix('@'))
}

/// Expand `items` into a flat, deduplicated glyph-name list
///
/// A group revisited within the same expansion contributes nothing further,
/// so cyclic group definitions terminate. An unknown group reference
/// resolves to nothing; neither case is an error.
pub fn expand_members(items: &[String], groups: &HashMap<String, Vec<String>>) -> Vec<String> {
    let mut expanded = Vec::with_capacity(items.len());
    let mut seen: HashSet<String> = HashSet::with_capacity(items.len());
    let mut visiting: SmallVec<[String; 4]> = SmallVec::new();
    expand_into(items, groups, &mut visiting, &mut seen, &mut expanded);
    expanded
}

fn expand_into(
    items: &[String],
    groups: &HashMap<String, Vec<String>>,
    visiting: &mut SmallVec<[String; 4]>,
    seen: &mut HashSet<String>,
    out: &mut Vec<String>,
) {
    for item in items {
        if let Some(group_name) = group_reference(item) {
            if visiting.iter().any(|g| g == group_name) {
                // Cycle guard: the revisited branch contributes nothing
                continue;
            }
            match groups.get(group_name) {
                Some(members) => {
                    visiting.push(group_name.to_string());
                    expand_into(members, groups, visiting, seen, out);
                    visiting.pop();
                }
                None => {
                    debug!("Unknown group reference '{group_name}' expands to nothing");
                }
            }
        } else if seen.insert(item.clone()) {
            out.push(item.clone());
        }
    }
}
