//! Logging setup for embedders
//!
//! The library itself only emits `tracing` events; installing a subscriber
//! is the embedding application's call. This helper wires up the standard
//! env-filtered formatter for binaries and ad-hoc harnesses.

use tracing_subscriber::{fmt, EnvFilter};

/// Install an env-filtered fmt subscriber
///
/// Filter via `RUST_LOG`, defaulting to `info` for this crate. Calling it
/// twice is harmless; the second install attempt is ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kalam=info"));
    let _ = fmt().with_env_filter(filter).try_init();
}
