//! Typed accessors for environment variables that are already set.
//!
//! These are read-only conveniences for programs launched by envault (or
//! embedding it) that want numbers, durations, URLs and the like instead of
//! raw strings.
//!
//! ```rust,ignore
//! use envault_env::get_env;
//!
//! let port = get_env("PORT").with_default("8080").as_u32()?;
//! let timeout = get_env("REQUEST_TIMEOUT").with_default("30s").as_duration()?;
//! let db = get_env("DATABASE_URL").required()?.as_url()?;
//! ```

use crate::parse::{parse_bool, parse_bytes, parse_duration};
use crate::sink::EnvSink;
use chrono::NaiveDateTime;
use envault_core::{Error, Result};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Look up `key` in the process environment
pub fn get_env(key: &str) -> EnvVar {
    match EnvSink::var(key) {
        Some(value) => EnvVar {
            key: key.to_string(),
            value,
            set: true,
        },
        None => EnvVar {
            key: key.to_string(),
            value: String::new(),
            set: false,
        },
    }
}

/// The value of `key`, or `default` when it is unset. An empty value counts as set.
pub fn get_env_or_default(key: &str, default: &str) -> String {
    get_env(key).with_default(default).value
}

/// A snapshot of one environment variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    key: String,
    value: String,
    set: bool,
}

impl EnvVar {
    /// Use `default` as the value when the variable is unset.
    ///
    /// [`EnvVar::is_set`] keeps reporting the lookup result.
    #[must_use]
    pub fn with_default(mut self, default: &str) -> Self {
        if !self.set {
            self.value = default.to_string();
        }
        self
    }

    pub fn is_set(&self) -> bool {
        self.set
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Fail when the variable was not present in the environment
    pub fn required(self) -> Result<Self> {
        if self.set {
            Ok(self)
        } else {
            Err(Error::environment(
                self.key,
                "required environment variable is not set",
            ))
        }
    }

    pub fn as_f64(&self) -> Result<f64> {
        self.parse_std()
    }

    pub fn as_bool(&self) -> Result<bool> {
        parse_bool(&self.value).map_err(|msg| self.error(msg))
    }

    pub fn as_i32(&self) -> Result<i32> {
        self.parse_std()
    }

    pub fn as_i64(&self) -> Result<i64> {
        self.parse_std()
    }

    pub fn as_u32(&self) -> Result<u32> {
        self.parse_std()
    }

    pub fn as_u64(&self) -> Result<u64> {
        self.parse_std()
    }

    pub fn as_duration(&self) -> Result<Duration> {
        parse_duration(&self.value).map_err(|msg| self.error(msg))
    }

    /// Parse as an absolute URL; a scheme and host are required
    pub fn as_url(&self) -> Result<Url> {
        let url = Url::parse(&self.value)
            .map_err(|e| self.error(format!("invalid URL '{}': {e}", self.value)))?;
        if url.host_str().map_or(true, str::is_empty) {
            return Err(self.error(format!(
                "invalid URL '{}': expected scheme and host",
                self.value
            )));
        }
        Ok(url)
    }

    pub fn as_csv(&self) -> Result<Vec<String>> {
        self.as_list(",")
    }

    /// Split on `separator`, trimming each part and dropping empty ones
    pub fn as_list(&self, separator: &str) -> Result<Vec<String>> {
        if separator.is_empty() {
            return Err(self.error("separator cannot be empty"));
        }
        Ok(self
            .value
            .split(separator)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Parse with a chrono format string, e.g. `%Y-%m-%d %H:%M:%S`
    pub fn as_datetime(&self, format: &str) -> Result<NaiveDateTime> {
        if format.is_empty() {
            return Err(self.error("format cannot be empty"));
        }
        NaiveDateTime::parse_from_str(&self.value, format)
            .map_err(|e| self.error(format!("invalid datetime '{}': {e}", self.value)))
    }

    /// Byte sizes with binary units, see [`crate::parse::parse_bytes`]
    pub fn as_bytes(&self) -> Result<u64> {
        parse_bytes(&self.value).map_err(|msg| self.error(msg))
    }

    /// Parse `k1=v1,k2=v2` style values with configurable separators
    pub fn as_map(
        &self,
        kv_separator: &str,
        entry_separator: &str,
    ) -> Result<HashMap<String, String>> {
        if kv_separator.is_empty() || entry_separator.is_empty() {
            return Err(self.error("separators cannot be empty"));
        }
        if self.value.trim().is_empty() {
            return Ok(HashMap::new());
        }

        let mut map = HashMap::new();
        for entry in self.value.split(entry_separator) {
            let Some((key, value)) = entry.split_once(kv_separator) else {
                return Err(self.error(format!("invalid map entry '{}'", entry.trim())));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(self.error(format!(
                    "invalid map entry '{}': empty key",
                    entry.trim()
                )));
            }
            map.insert(key.to_string(), value.trim().to_string());
        }
        Ok(map)
    }

    /// Accept the value only if it is one of `choices`
    pub fn as_enum(&self, choices: &[&str]) -> Result<String> {
        if choices.is_empty() {
            return Err(self.error("enum options cannot be empty"));
        }
        if choices.contains(&self.value.as_str()) {
            Ok(self.value.clone())
        } else {
            Err(self.error(format!(
                "value '{}' is not one of [{}]",
                self.value,
                choices.join(", ")
            )))
        }
    }

    fn parse_std<T>(&self) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.value
            .parse()
            .map_err(|e| self.error(format!("invalid value '{}': {e}", self.value)))
    }

    fn error(&self, message: impl Into<String>) -> Error {
        Error::environment(&self.key, message)
    }
}
