//! Font project data structures
//!
//! Character records, drawn outlines and the per-codepoint outline store.
//! These are the thread-safe value types the positioning core reads and
//! (for baked ligatures and edited metadata) writes back.

pub mod character;
pub mod outline;
pub mod store;

// Re-export commonly used items
pub use character::{CharacterRecord, CharacterSet, GlyphClass, LigatureMetadata};
pub use outline::{Contour, ContourPoint, GlyphOutline, PointKind};
pub use store::GlyphOutlineStore;
