//! Error handling for the positioning engine
//!
//! Almost everything in this crate degrades instead of failing: unknown
//! group references expand to nothing, classes with every member excepted
//! fall back to their first member, and pairs without drawn geometry are
//! skipped. The one fatal condition is an edited pair whose own default
//! cannot be computed at all.

use anyhow::Context;

/// Standard result type used throughout the engine
pub type KalamResult<T> = anyhow::Result<T>;

/// Extension trait for adding glyph-pair context to errors
pub trait KalamContext<T> {
    /// Add context describing the (base, mark) pair an operation failed on
    fn with_pair_context(self, action: &str, base: &str, mark: &str) -> KalamResult<T>;
}

impl<T, E> KalamContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_pair_context(self, action: &str, base: &str, mark: &str) -> KalamResult<T> {
        self.with_context(|| format!("Failed to {action} for pair {base}+{mark}"))
    }
}

impl<T> KalamContext<T> for Option<T> {
    fn with_pair_context(self, action: &str, base: &str, mark: &str) -> KalamResult<T> {
        self.with_context(|| format!("Failed to {action} for pair {base}+{mark}"))
    }
}
