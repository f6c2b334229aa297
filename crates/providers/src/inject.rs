//! Runs providers in order and aggregates their failures.
//!
//! Providers run strictly one after another: earlier providers take
//! precedence because the environment sink never overwrites a key. A failing
//! provider does not stop later ones, and whatever a successful provider
//! applied stays applied even if a later provider fails.

use crate::provider::Provider;
use envault_core::{CancelSignal, Error, InjectError};
use tracing::debug;

/// Call [`Provider::inject`] on every provider, in order.
pub async fn inject(providers: &[Box<dyn Provider>]) -> Result<(), InjectError> {
    run(providers, None).await
}

/// Like [`inject`], but providers with the cancellation capability observe
/// `signal`. Providers without it run through their plain `inject`.
pub async fn inject_with_cancellation(
    signal: &CancelSignal,
    providers: &[Box<dyn Provider>],
) -> Result<(), InjectError> {
    run(providers, Some(signal)).await
}

async fn run(
    providers: &[Box<dyn Provider>],
    signal: Option<&CancelSignal>,
) -> Result<(), InjectError> {
    let mut errors: Vec<Error> = Vec::new();

    for provider in providers {
        debug!("injecting provider {}", provider.name());
        let result = match (signal, provider.as_cancellable()) {
            (Some(signal), Some(cancellable)) => cancellable.inject_with_cancellation(signal).await,
            _ => provider.inject().await,
        };
        match result {
            Ok(()) => debug!("provider {} finished", provider.name()),
            Err(e) => {
                debug!("provider {} returned error: {}", provider.name(), e);
                errors.push(e);
            }
        }
    }

    match InjectError::from_errors(errors) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
