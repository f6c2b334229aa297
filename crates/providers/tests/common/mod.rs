use std::collections::HashMap;

/// Snapshot of selected environment variables, restored on drop.
///
/// Tests touching the process environment must also be `#[serial]`.
pub struct EnvGuard {
    original: HashMap<String, Option<String>>,
}

impl EnvGuard {
    /// Remember `vars` and clear them for the duration of the test
    pub fn new(vars: &[&str]) -> Self {
        let mut original = HashMap::new();
        for var in vars {
            original.insert(var.to_string(), std::env::var(var).ok());
            std::env::remove_var(var);
        }
        Self { original }
    }

    /// Set a variable, tracking it for restoration if not already tracked
    pub fn set(&mut self, key: &str, value: &str) {
        self.original
            .entry(key.to_string())
            .or_insert_with(|| std::env::var(key).ok());
        std::env::set_var(key, value);
    }

    /// Track a variable that the code under test may create
    #[allow(dead_code)]
    pub fn track(&mut self, key: &str) {
        self.original
            .entry(key.to_string())
            .or_insert_with(|| std::env::var(key).ok());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.original {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}

#[allow(dead_code)]
pub const VAULT_VARS: &[&str] = &["VAULT_ADDR", "VAULT_TOKEN", "VAULT_NAMESPACE", "HOME"];

/// Minimal KV v2 read response wrapping `data`
#[allow(dead_code)]
pub fn kv_body(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "request_id": "2e0f1a4c",
        "data": {
            "data": data,
            "metadata": { "version": 1 }
        }
    })
}
