/// Constants used throughout the envault codebase
use std::time::Duration;

// Vault resolution
pub const VAULT_ADDR_VAR: &str = "VAULT_ADDR";
pub const VAULT_TOKEN_VAR: &str = "VAULT_TOKEN";
pub const VAULT_NAMESPACE_VAR: &str = "VAULT_NAMESPACE";
pub const VAULT_TOKEN_FILE: &str = ".vault-token";

// Vault request headers
pub const VAULT_TOKEN_HEADER: &str = "X-Vault-Token";
pub const VAULT_NAMESPACE_HEADER: &str = "X-Vault-Namespace";

// KV v2 shorthand paths: `kvv2/<path>` is rewritten to `v1/kvv2/data/<path>`
pub const KV_SHORTHAND_PREFIX: &str = "kvv2/";
pub const KV_MOUNT: &str = "kvv2";
pub const KV_DATA_SEGMENT: &str = "data";
pub const API_VERSION_SEGMENT: &str = "v1";

pub const VAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Dotenv
pub const DEFAULT_DOTENV_PATH: &str = "./.env";

// Diagnostics filter, EnvFilter syntax
pub const ENVAULT_LOG_VAR: &str = "ENVAULT_LOG";
