//! HashiCorp Vault provider
//!
//! Reads one KV v2 secret with a single `GET` and injects every field of it.
//!
//! # Resolution
//!
//! Settings are resolved once, when the provider is built:
//!
//! - `VAULT_ADDR`: server address. Without it the provider is disabled and
//!   `inject` fails with [`Error::MissingAddress`].
//! - `VAULT_TOKEN`, falling back to the trimmed contents of `~/.vault-token`.
//! - The secret path passed by the caller, normalized so that the
//!   `kvv2/<path>` shorthand reaches `v1/kvv2/data/<path>`.
//! - `VAULT_NAMESPACE`, sent as `X-Vault-Namespace` when non-empty.
//!
//! Missing settings are reported by `inject`, not by the constructor, so a
//! misconfigured vault shows up alongside every other provider failure.

mod path;
mod response;

pub use path::{join_url_path, normalize_secret_path};
pub use response::{decode_secret, flatten};

use crate::provider::{CancellableProvider, Provider};
use async_trait::async_trait;
use envault_core::{
    CancelSignal, Error, Result, VAULT_ADDR_VAR, VAULT_NAMESPACE_HEADER, VAULT_NAMESPACE_VAR,
    VAULT_REQUEST_TIMEOUT, VAULT_TOKEN_FILE, VAULT_TOKEN_HEADER, VAULT_TOKEN_VAR,
};
use envault_env::EnvSink;
use std::future::Future;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Resolved connection settings for one vault read
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Server address, e.g. `https://vault.example.com:8200`
    pub address: Option<String>,
    pub token: Option<String>,
    /// Secret path as requested; the `kvv2/` shorthand is expanded against
    /// the final address by [`VaultConfig::secret_path`]
    pub path: Option<String>,
    /// Vault Enterprise namespace
    pub namespace: Option<String>,
    pub timeout: Duration,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            address: None,
            token: None,
            path: None,
            namespace: None,
            timeout: VAULT_REQUEST_TIMEOUT,
        }
    }
}

impl VaultConfig {
    /// Resolve settings from the process environment.
    ///
    /// Reads:
    /// - VAULT_ADDR: Vault server address
    /// - VAULT_TOKEN: Authentication token, else `~/.vault-token`
    /// - VAULT_NAMESPACE: Enterprise namespace
    pub fn from_env(secret_path: &str) -> Self {
        let address = non_empty(EnvSink::var(VAULT_ADDR_VAR));
        if address.is_none() {
            debug!("vault: {} not set, provider disabled", VAULT_ADDR_VAR);
        }

        Self {
            token: non_empty(EnvSink::var(VAULT_TOKEN_VAR)).or_else(token_from_home),
            namespace: non_empty(EnvSink::var(VAULT_NAMESPACE_VAR)),
            ..Self::default()
        }
        .with_optional_address(address)
        .with_secret_path(secret_path)
    }

    /// Set the Vault server address
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    fn with_optional_address(mut self, address: Option<String>) -> Self {
        self.address = address;
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the secret path. Order relative to [`VaultConfig::with_address`]
    /// does not matter.
    #[must_use]
    pub fn with_secret_path(mut self, secret_path: &str) -> Self {
        self.path = non_empty(Some(secret_path.to_string()));
        self
    }

    /// The secret path with the `kvv2/` shorthand expanded for this address
    pub fn secret_path(&self) -> Option<String> {
        let path = self.path.as_deref()?;
        let address = self.address.as_deref().unwrap_or_default();
        Some(normalize_secret_path(address, path))
    }

    /// Set the Vault Enterprise namespace
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = non_empty(Some(namespace.into()));
        self
    }

    /// Set request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether an address was discovered
    pub fn is_enabled(&self) -> bool {
        self.address.is_some()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn token_from_home() -> Option<String> {
    let home = dirs::home_dir()?;
    let raw = std::fs::read_to_string(home.join(VAULT_TOKEN_FILE)).ok()?;
    non_empty(Some(raw.trim().to_string()))
}

/// HashiCorp Vault KV v2 provider
#[derive(Debug, Clone)]
pub struct VaultProvider {
    config: VaultConfig,
    signal: Option<CancelSignal>,
}

impl VaultProvider {
    pub fn new(config: VaultConfig) -> Self {
        Self {
            config,
            signal: None,
        }
    }

    /// Create a provider for `secret_path` from environment variables
    pub fn from_env(secret_path: &str) -> Self {
        Self::new(VaultConfig::from_env(secret_path))
    }

    /// Signal observed by the plain [`Provider::inject`]
    #[must_use]
    pub fn with_cancellation(mut self, signal: CancelSignal) -> Self {
        self.signal = Some(signal);
        self
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// Full request URL: the address with the secret path joined onto its path
    pub fn secret_url(&self) -> Result<Url> {
        let address = self.config.address.as_deref().ok_or(Error::MissingAddress)?;
        let path = self.config.secret_path().ok_or(Error::MissingPath)?;

        let mut url = Url::parse(address).map_err(|e| Error::invalid_address(address, e))?;
        let joined = join_url_path(url.path(), &path);
        url.set_path(&joined);
        Ok(url)
    }

    async fn fetch(&self, signal: Option<&CancelSignal>) -> Result<()> {
        debug!(
            "vault: starting injection (addr={:?}, path={:?}, namespace={:?})",
            self.config.address, self.config.path, self.config.namespace
        );
        if self.config.address.is_none() {
            return Err(Error::MissingAddress);
        }
        let token = self.config.token.as_deref().ok_or(Error::MissingToken)?;
        let url = self.secret_url()?;
        debug!("vault: requesting {}", url);

        if signal.is_some_and(CancelSignal::is_cancelled) {
            return Err(Error::cancelled(url.as_str()));
        }

        let client = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| Error::request_failure(url.as_str(), e))?;

        let mut request = client.get(url.clone()).header(VAULT_TOKEN_HEADER, token);
        if let Some(namespace) = self.config.namespace.as_deref() {
            request = request.header(VAULT_NAMESPACE_HEADER, namespace);
        }

        let response = until_cancelled(signal, &url, request.send())
            .await?
            .map_err(|e| Error::request_failure(url.as_str(), e))?;
        let status = response.status();
        let body = until_cancelled(signal, &url, response.text())
            .await?
            .map_err(|e| Error::request_failure(url.as_str(), e))?;

        if status.as_u16() >= 300 {
            return Err(Error::http_status(status.to_string(), body));
        }

        let bundle = decode_secret(&body)?;
        debug!("vault: received {} variables from {}", bundle.len(), url);

        EnvSink::apply(&bundle).map_err(|e| Error::apply(url.as_str(), e))?;
        debug!("vault: finished applying variables from {}", url);
        Ok(())
    }
}

/// Race `fut` against the cancellation signal, if there is one.
async fn until_cancelled<F: Future>(
    signal: Option<&CancelSignal>,
    url: &Url,
    fut: F,
) -> Result<F::Output> {
    let Some(signal) = signal else {
        return Ok(fut.await);
    };
    tokio::select! {
        biased;
        () = signal.cancelled() => Err(Error::cancelled(url.as_str())),
        out = fut => Ok(out),
    }
}

#[async_trait]
impl Provider for VaultProvider {
    fn name(&self) -> &str {
        "vault"
    }

    async fn inject(&self) -> Result<()> {
        self.fetch(self.signal.as_ref()).await
    }

    fn as_cancellable(&self) -> Option<&dyn CancellableProvider> {
        Some(self)
    }
}

#[async_trait]
impl CancellableProvider for VaultProvider {
    async fn inject_with_cancellation(&self, signal: &CancelSignal) -> Result<()> {
        self.fetch(Some(signal)).await
    }
}
