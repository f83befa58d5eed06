//! Font source data
//!
//! Metrics of the font being authored, as opposed to anything belonging to
//! the editing UI.

pub mod metrics;

// Explicit re-exports for public API
pub use metrics::FontMetrics;
