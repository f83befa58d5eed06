//! Geometry utility functions
//!
//! Shared geometry helpers for offset math, kept here to avoid duplication
//! between the heuristic engine and the cascade engine.

use kurbo::Vec2;

use crate::core::config::MovementConstraint;

/// Zero the axis a movement constraint pins
///
/// A "horizontal" rule may only move marks along x, so the y component is
/// forced to 0; "vertical" is the mirror case.
pub fn constrain_offset(offset: Vec2, constraint: MovementConstraint) -> Vec2 {
    match constraint {
        MovementConstraint::None => offset,
        MovementConstraint::Horizontal => Vec2::new(offset.x, 0.0),
        MovementConstraint::Vertical => Vec2::new(0.0, offset.y),
    }
}
