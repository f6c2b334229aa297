//! Shared utilities for envault
//!
//! Currently this is the diagnostics setup shared by the binary and by
//! embedders that want the same log format.

pub mod tracing;

pub use self::tracing::init as init_tracing;
