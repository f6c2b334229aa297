//! Core domain types, errors, and constants for `envault`.
//!
//! ## Key Components
//!
//! - **`errors`**: The `Error` enum covering every way a provider can fail,
//!   the `Result` alias, and `InjectError`, the aggregate reported after a
//!   full injection run.
//! - **`types`**: The `Bundle` produced by a single provider invocation.
//! - **`cancel`**: `CancelSignal`, the cooperative cancellation handle
//!   observed by network-bound providers.
//! - **`constants`**: Environment variable names, HTTP headers, and defaults.

pub mod cancel;
pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    cancel::CancelSignal,
    constants::*,
    errors::{Error, InjectError, Result},
    types::Bundle,
};
