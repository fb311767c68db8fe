//! JSON-RPC 2.0 envelopes as spoken by `monero-wallet-rpc`.
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{RpcError, RpcResult, MISSING_RESULT_AND_ERROR};

pub const JSON_RPC_VERSION: &str = "2.0";
/// The daemon echoes the id back; every call uses the same one.
pub const REQUEST_ID: &str = "0";

/// Outbound envelope. `params` is omitted entirely when absent.
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<'a, P: Serialize> {
    jsonrpc: &'static str,
    id: &'static str,
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<P>,
}

impl<'a, P: Serialize> JsonRpcRequest<'a, P> {
    pub fn new(method: &'a str, params: Option<P>) -> Self {
        JsonRpcRequest {
            jsonrpc: JSON_RPC_VERSION,
            id: REQUEST_ID,
            method,
            params,
        }
    }
}

/// Inbound envelope.
#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

/// Error object reported by the daemon.
#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    #[serde(default)]
    message: String,
}

/// Split a response body into its `result` payload or the matching error.
///
/// `error` wins over `result`; a body carrying neither is malformed.
pub fn into_result(body: Value) -> RpcResult<Value> {
    let response: JsonRpcResponse = serde_json::from_value(body)
        .map_err(|e| RpcError::malformed(format!("invalid JSON-RPC envelope: {}", e)))?;

    if let Some(error) = response.error {
        return Err(RpcError::Rpc {
            code: error.code,
            message: error.message,
        });
    }

    response
        .result
        .ok_or_else(|| RpcError::malformed(MISSING_RESULT_AND_ERROR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_envelope_has_fixed_version_and_id() {
        let request = JsonRpcRequest::new("get_payments", Some(json!({ "payment_id": "ab" })));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "id": "0",
                "method": "get_payments",
                "params": { "payment_id": "ab" }
            })
        );
    }

    #[test]
    fn request_without_params_omits_field() {
        let request = JsonRpcRequest::new("getheight", None::<()>);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "jsonrpc": "2.0", "id": "0", "method": "getheight" }));
    }

    #[test]
    fn result_payload_is_returned() {
        let body = json!({ "id": "0", "jsonrpc": "2.0", "result": { "height": 145545 } });
        assert_eq!(into_result(body).unwrap(), json!({ "height": 145545 }));
    }

    #[test]
    fn error_object_is_reported_verbatim() {
        let body = json!({
            "id": "0",
            "jsonrpc": "2.0",
            "error": { "code": -1, "message": "Failed to open wallet" }
        });
        match into_result(body) {
            Err(RpcError::Rpc { code, message }) => {
                assert_eq!(code, -1);
                assert_eq!(message, "Failed to open wallet");
            }
            other => panic!("expected rpc error, got {:?}", other),
        }
    }

    #[test]
    fn error_takes_priority_over_result() {
        let body = json!({
            "result": {},
            "error": { "code": -4, "message": "not enough money" }
        });
        assert_eq!(into_result(body).unwrap_err().rpc_code(), Some(-4));
    }

    #[test]
    fn body_without_result_or_error_is_malformed() {
        let body = json!({ "id": "0", "jsonrpc": "2.0" });
        match into_result(body) {
            Err(RpcError::MalformedResponse { reason }) => {
                assert_eq!(reason, MISSING_RESULT_AND_ERROR)
            }
            other => panic!("expected malformed response, got {:?}", other),
        }
    }

    #[test]
    fn non_object_body_is_malformed() {
        assert!(matches!(
            into_result(json!([1, 2, 3])),
            Err(RpcError::MalformedResponse { .. })
        ));
    }
}
