//! Provider backed by a local dotenv file.

use crate::provider::Provider;
use async_trait::async_trait;
use envault_core::{Bundle, Error, Result, DEFAULT_DOTENV_PATH};
use envault_env::EnvSink;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads `KEY=VALUE` assignments from a file.
///
/// A missing file is not an error: there is simply nothing to inject.
#[derive(Debug, Clone)]
pub struct DotenvProvider {
    path: PathBuf,
}

impl DotenvProvider {
    /// An empty path means `./.env` relative to the working directory
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path = if path.as_os_str().is_empty() {
            PathBuf::from(DEFAULT_DOTENV_PATH)
        } else {
            path
        };
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the file into a bundle; `Ok(None)` when the file does not exist
    // `from_path_iter` is the only dotenv 0.15 entry point that yields pairs
    // without writing them to the environment.
    #[allow(deprecated)]
    fn load(&self) -> Result<Option<Bundle>> {
        let entries = match ::dotenv::from_path_iter(&self.path) {
            Ok(entries) => entries,
            Err(::dotenv::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(None);
            }
            Err(e) => return Err(self.map_error(e)),
        };

        let mut bundle = Bundle::new();
        for entry in entries {
            let (key, value) = entry.map_err(|e| self.map_error(e))?;
            bundle.insert(key, value);
        }
        Ok(Some(bundle))
    }

    fn map_error(&self, error: ::dotenv::Error) -> Error {
        match error {
            ::dotenv::Error::Io(e) => Error::read_failure(&self.path, e),
            other => Error::parse_failure(&self.path, other.to_string()),
        }
    }
}

impl Default for DotenvProvider {
    fn default() -> Self {
        Self::new(DEFAULT_DOTENV_PATH)
    }
}

#[async_trait]
impl Provider for DotenvProvider {
    fn name(&self) -> &str {
        "dotenv"
    }

    async fn inject(&self) -> Result<()> {
        debug!("dotenv: reading {}", self.path.display());
        let Some(bundle) = self.load()? else {
            debug!("dotenv: {} not found", self.path.display());
            return Ok(());
        };
        debug!(
            "dotenv: loaded {} variables from {}",
            bundle.len(),
            self.path.display()
        );

        EnvSink::apply(&bundle)
            .map_err(|e| Error::apply(self.path.display().to_string(), e))?;
        debug!("dotenv: finished applying variables from {}", self.path.display());
        Ok(())
    }
}
