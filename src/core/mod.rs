//! Core engine functionality
//!
//! This module contains the crate-wide basics:
//! - Error and result conventions
//! - The read-only project configuration snapshot

pub mod config;
pub mod errors;

// Re-export commonly used items
pub use config::{
    AttachmentClass, ClassSide, GlyphPair, ManualAnchorRule, MovementConstraint, PositioningRule,
    ProjectSnapshot,
};
pub use errors::{KalamContext, KalamResult};
