use std::fmt;
use std::path::PathBuf;

/// Result type alias for envault operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for envault operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No vault address could be discovered
    #[error("vault: VAULT_ADDR is required to inject environment variables")]
    MissingAddress,

    /// An address is configured but neither VAULT_TOKEN nor ~/.vault-token yielded a token
    #[error("vault: VAULT_ADDR set but no token found (VAULT_TOKEN or ~/.vault-token)")]
    MissingToken,

    /// An address is configured but no secret path was supplied
    #[error("vault: VAULT_ADDR set but no secret path provided")]
    MissingPath,

    /// The vault address is not a valid URL
    #[error("vault: invalid VAULT_ADDR '{address}': {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport-level failure (DNS, connection refused, TLS, timeout)
    #[error("vault: request to '{url}' failed: {source}")]
    RequestFailure {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The caller's cancellation signal fired before the request completed
    #[error("vault: request to '{url}' cancelled")]
    Cancelled { url: String },

    /// The secret store answered with a status code >= 300
    #[error("vault: {status}\n{body}")]
    HttpStatus { status: String, body: String },

    /// The response body is not `{"data":{"data":{...}}}`
    #[error("vault: decode body: {source}")]
    DecodeFailure {
        #[source]
        source: serde_json::Error,
    },

    /// Reading a dotenv file failed for a reason other than it being absent
    #[error("read '{}': {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dotenv file contains a malformed assignment
    #[error("parse '{}' as dotenv: {message}", .path.display())]
    ParseFailure { path: PathBuf, message: String },

    /// The platform refused an environment write
    #[error("failed to set {key}: {message}")]
    SetFailure { key: String, message: String },

    /// A bundle could not be applied; `origin` names the file or URL it came from
    #[error("cannot set env vars provided by '{origin}': {source}")]
    Apply {
        origin: String,
        #[source]
        source: Box<Error>,
    },

    /// Environment variable accessor errors
    #[error("environment variable '{variable}' error: {message}")]
    Environment { variable: String, message: String },
}

// Helper methods for creating errors with context
impl Error {
    /// Create an invalid address error
    #[must_use]
    pub fn invalid_address(address: impl Into<String>, source: url::ParseError) -> Self {
        Error::InvalidAddress {
            address: address.into(),
            source,
        }
    }

    /// Create a transport error for a request to `url`
    #[must_use]
    pub fn request_failure(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::RequestFailure {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Create a cancellation error for a request to `url`
    #[must_use]
    pub fn cancelled(url: impl Into<String>) -> Self {
        Error::Cancelled { url: url.into() }
    }

    /// Create an HTTP status error from the status line and raw body
    #[must_use]
    pub fn http_status(status: impl Into<String>, body: impl Into<String>) -> Self {
        Error::HttpStatus {
            status: status.into(),
            body: body.into(),
        }
    }

    /// Create a read error for `path`
    #[must_use]
    pub fn read_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::ReadFailure {
            path: path.into(),
            source,
        }
    }

    /// Create a dotenv parse error for `path`
    #[must_use]
    pub fn parse_failure(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::ParseFailure {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an environment write error
    #[must_use]
    pub fn set_failure(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::SetFailure {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Wrap a sink failure with the origin of the bundle
    #[must_use]
    pub fn apply(origin: impl Into<String>, source: Error) -> Self {
        Error::Apply {
            origin: origin.into(),
            source: Box::new(source),
        }
    }

    /// Create an environment variable accessor error
    #[must_use]
    pub fn environment(variable: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Environment {
            variable: variable.into(),
            message: message.into(),
        }
    }

    /// Whether this error was caused by a cancellation signal
    pub fn is_cancelled(&self) -> bool {
        match self {
            Error::Cancelled { .. } => true,
            Error::Apply { source, .. } => source.is_cancelled(),
            _ => false,
        }
    }
}

/// Every failure collected during one injection run.
///
/// The display form contains each cause's message on its own line so a single
/// run surfaces all problems, not just the first.
#[derive(Debug)]
pub struct InjectError {
    errors: Vec<Error>,
}

impl InjectError {
    /// Returns `None` when nothing failed
    pub fn from_errors(errors: Vec<Error>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for InjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for InjectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.errors
            .first()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
