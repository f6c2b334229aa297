//! Secret providers and the injection orchestrator
//!
//! Providers fetch a bundle of key/value pairs from one source and apply it
//! to the process environment through [`envault_env::EnvSink`]. The
//! orchestrator runs an ordered list of providers, never aborting early, and
//! reports every failure at once.
//!
//! ```rust,ignore
//! use envault_providers::{inject, DotenvProvider, Provider, VaultProvider};
//!
//! let providers: Vec<Box<dyn Provider>> = vec![
//!     Box::new(DotenvProvider::new(".env")),
//!     Box::new(VaultProvider::from_env("kvv2/my-service/dev/env-vars")),
//! ];
//! inject(&providers).await?;
//! ```

pub mod dotenv;
pub mod inject;
pub mod provider;
pub mod vault;

pub use self::{
    dotenv::DotenvProvider,
    inject::{inject, inject_with_cancellation},
    provider::{CancellableProvider, Provider},
    vault::{VaultConfig, VaultProvider},
};
