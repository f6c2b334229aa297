//! First-write-wins application of bundles to the process environment.
//!
//! Once a key exists in the environment, whether it came from the parent
//! process or from an earlier provider in the same run, it is never
//! overwritten. Callers rely on this: the order in which providers run is the
//! order of precedence between sources.

use envault_core::{Bundle, Error, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::env;
use tracing::debug;

/// Global RwLock for environment variable access from within envault.
/// Guards each read-then-conditionally-write so two sinks never interleave.
static ENV_LOCK: Lazy<RwLock<()>> = Lazy::new(|| RwLock::new(()));

/// Writer for the live process environment
pub struct EnvSink;

impl EnvSink {
    /// Apply every entry of `bundle` whose key is not already set.
    ///
    /// Returns the number of keys that were written. Fails with
    /// [`Error::SetFailure`] on the first entry the platform would reject;
    /// entries applied before it stay applied.
    pub fn apply(bundle: &Bundle) -> Result<usize> {
        let _guard = ENV_LOCK.write();

        let mut applied = 0;
        for (key, value) in bundle {
            validate_key(key)?;
            if env::var_os(key).is_some() {
                debug!("environment variable {} already set", key);
                continue;
            }
            validate_value(key, value)?;
            env::set_var(key, value);
            debug!("environment variable {} set", key);
            applied += 1;
        }
        Ok(applied)
    }

    /// Read a variable. Non-unicode values are reported as absent.
    pub fn var(key: &str) -> Option<String> {
        let _guard = ENV_LOCK.read();
        env::var(key).ok()
    }
}

// Reject the writes `std::env::set_var` would panic on.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(Error::set_failure(key, "variable name is empty"));
    }
    if key.contains('=') {
        return Err(Error::set_failure(key, "variable name contains '='"));
    }
    if key.contains('\0') {
        return Err(Error::set_failure(key, "variable name contains a NUL byte"));
    }
    Ok(())
}

fn validate_value(key: &str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(Error::set_failure(key, "value contains a NUL byte"));
    }
    Ok(())
}
