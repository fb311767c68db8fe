use async_trait::async_trait;
use reqwest::header::WWW_AUTHENTICATE;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::errors::TransportError;

/// "POST JSON, receive JSON" capability the client dispatches through.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one JSON-RPC envelope and return the parsed response body.
    async fn post_json(&self, body: &Value) -> Result<Value, TransportError>;
}

/// HTTP transport for a wallet daemon reachable at `http://host:port/json_rpc`.
///
/// When credentials are configured they are only sent after the daemon
/// answers with a `401` Basic challenge.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .build()
            .map_err(TransportError::ClientBuild)?;

        Ok(HttpTransport {
            client,
            endpoint: config.endpoint(),
            config,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn send(&self, body: &Value, authenticate: bool) -> Result<Response, TransportError> {
        let mut request = self.client.post(&self.endpoint).json(body);
        if authenticate {
            request = request.basic_auth(&self.config.username, Some(self.config.password()));
        }
        Ok(request.send().await?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, body: &Value) -> Result<Value, TransportError> {
        let mut response = self.send(body, false).await?;

        if self.config.has_credentials()
            && response.status() == StatusCode::UNAUTHORIZED
            && is_basic_challenge(&response)
        {
            tracing::debug!(
                endpoint = %self.endpoint,
                "daemon requested basic auth, resending with credentials"
            );
            response = self.send(body, true).await?;
        }

        let status = response.status();
        let bytes = response.bytes().await?;

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => Err(TransportError::Status(status)),
            Err(e) => Err(TransportError::InvalidBody(e)),
        }
    }
}

fn is_basic_challenge(response: &Response) -> bool {
    response
        .headers()
        .get_all(WWW_AUTHENTICATE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| {
            value
                .trim_start()
                .get(..5)
                .is_some_and(|scheme| scheme.eq_ignore_ascii_case("basic"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_targets_json_rpc_endpoint() {
        let transport = HttpTransport::new(ClientConfig::new("10.0.0.5", 18083)).unwrap();
        assert_eq!(transport.endpoint(), "http://10.0.0.5:18083/json_rpc");
        assert!(!transport.config().has_credentials());
    }

    #[tokio::test]
    async fn unreachable_daemon_is_a_transport_failure() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let transport = HttpTransport::new(ClientConfig::new("127.0.0.1", port)).unwrap();
        let result = transport.post_json(&serde_json::json!({})).await;
        assert!(matches!(result, Err(TransportError::Http(_))));
    }
}
