use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

pub const DEFAULT_HOSTNAME: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 18082;
/// Path of the JSON-RPC endpoint on the wallet daemon.
pub const JSON_RPC_PATH: &str = "json_rpc";

/// Connection settings for a wallet daemon.
///
/// An empty `username` means no authentication is attached to requests.
#[derive(Debug, Deserialize)]
#[serde(from = "RawClientConfig")]
pub struct ClientConfig {
    pub hostname: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_PORT,
            username: String::new(),
            password: SecretString::from(String::new()),
        }
    }
}

impl ClientConfig {
    pub fn new(hostname: impl Into<String>, port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = SecretString::from(password.into());
        self
    }

    /// Full URL every call is POSTed to.
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}/{}", self.hostname, self.port, JSON_RPC_PATH)
    }

    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty()
    }

    pub(crate) fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

/// Plain-text form used only while deserializing.
#[derive(Deserialize)]
#[serde(default)]
struct RawClientConfig {
    hostname: String,
    port: u16,
    username: String,
    password: String,
}

impl Default for RawClientConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_PORT,
            username: String::new(),
            password: String::new(),
        }
    }
}

impl From<RawClientConfig> for ClientConfig {
    fn from(raw: RawClientConfig) -> Self {
        ClientConfig::new(raw.hostname, raw.port).with_credentials(raw.username, raw.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_wallet_daemon() {
        let config = ClientConfig::default();
        assert_eq!(config.hostname, "127.0.0.1");
        assert_eq!(config.port, 18082);
        assert!(config.username.is_empty());
        assert!(config.password().is_empty());
        assert!(!config.has_credentials());
        assert_eq!(config.endpoint(), "http://127.0.0.1:18082/json_rpc");
    }

    #[test]
    fn credentials_enable_authentication() {
        let config = ClientConfig::new("node.local", 28082).with_credentials("alice", "hunter2");
        assert!(config.has_credentials());
        assert_eq!(config.password(), "hunter2");
        assert_eq!(config.endpoint(), "http://node.local:28082/json_rpc");
    }

    #[test]
    fn password_is_redacted_in_debug_output() {
        let config = ClientConfig::default().with_credentials("alice", "hunter2");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn deserialize_fills_missing_fields_with_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{ "port": 38082, "username": "rpc" }"#).unwrap();
        assert_eq!(config.hostname, DEFAULT_HOSTNAME);
        assert_eq!(config.port, 38082);
        assert_eq!(config.username, "rpc");
        assert!(config.password().is_empty());
    }
}
