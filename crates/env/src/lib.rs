//! Process environment handling for envault
//!
//! The [`sink`] module is the only writer of the process environment during
//! injection and enforces first-write-wins. The [`accessors`] module offers
//! typed, read-only views over variables that are already set.

pub mod accessors;
pub mod parse;
pub mod sink;

pub use accessors::{get_env, get_env_or_default, EnvVar};
pub use sink::EnvSink;
