//! The `envault` command line front end
//!
//! Gathers providers from flags, injects their variables into the current
//! process, then runs the requested command and propagates its exit code.

pub mod args;
pub mod run;
pub mod runtime;

pub use args::Cli;
pub use run::{exit_code, run};
pub use runtime::{gather_providers, Runtime, SystemRuntime};
