//! The capability every secret source implements.

use async_trait::async_trait;
use envault_core::{CancelSignal, Result};

/// A source of environment variables.
///
/// `inject` fetches the source's bundle and applies it as one unit from the
/// caller's perspective. It returns the first unrecoverable failure; keys
/// already present in the environment are skipped, never reported.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &str;

    async fn inject(&self) -> Result<()>;

    /// Probe for the cancellation-aware capability.
    ///
    /// Providers that perform network calls override this to return
    /// `Some(self)`; the orchestrator falls back to [`Provider::inject`]
    /// when it returns `None`.
    fn as_cancellable(&self) -> Option<&dyn CancellableProvider> {
        None
    }
}

/// Extended capability for providers with a suspension point.
#[async_trait]
pub trait CancellableProvider: Provider {
    /// Same as [`Provider::inject`] but fails with
    /// [`envault_core::Error::Cancelled`] if `signal` is already cancelled or
    /// fires while a request is outstanding.
    async fn inject_with_cancellation(&self, signal: &CancelSignal) -> Result<()>;
}
