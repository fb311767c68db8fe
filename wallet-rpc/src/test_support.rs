use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::errors::TransportError;
use crate::transport::Transport;
use crate::wallet_client::WalletRpcClient;

type Responder = Box<dyn Fn(&Value) -> Result<Value, TransportError> + Send + Sync>;

/// In-memory transport that records every envelope and answers from a closure.
pub struct StubTransport {
    responder: Responder,
    requests: Mutex<Vec<Value>>,
}

impl StubTransport {
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&Value) -> Result<Value, TransportError> + Send + Sync + 'static,
    {
        Arc::new(StubTransport {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Answers every call with `{"result": result}`.
    pub fn with_result(result: Value) -> Arc<Self> {
        Self::with_body(json!({ "id": "0", "jsonrpc": "2.0", "result": result }))
    }

    /// Answers every call with the given raw body.
    pub fn with_body(body: Value) -> Arc<Self> {
        Self::new(move |_| Ok(body.clone()))
    }

    pub fn refusing_connections() -> Arc<Self> {
        Self::new(|_| {
            Err(TransportError::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        })
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Value {
        self.requests()
            .pop()
            .expect("no request was sent through the stub transport")
    }

    pub fn client(self: &Arc<Self>) -> WalletRpcClient {
        WalletRpcClient::with_transport(self.clone())
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn post_json(&self, body: &Value) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(body.clone());
        (self.responder)(body)
    }
}
