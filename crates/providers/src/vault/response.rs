use envault_core::{Bundle, Error, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/// KV v2 read response: `{"data": {"data": {...}, "metadata": {...}}}`
#[derive(Debug, Deserialize)]
struct KvResponse {
    data: KvData,
}

#[derive(Debug, Deserialize)]
struct KvData {
    data: Map<String, Value>,
}

/// Decode a KV v2 response body into a flat bundle
pub fn decode_secret(body: &str) -> Result<Bundle> {
    let response: KvResponse =
        serde_json::from_str(body).map_err(|source| Error::DecodeFailure { source })?;
    Ok(flatten(response.data.data))
}

/// Strings pass through; every other JSON value becomes its compact JSON text.
pub fn flatten(data: Map<String, Value>) -> Bundle {
    data.into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (key, value)
        })
        .collect()
}
