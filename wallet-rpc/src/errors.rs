use reqwest::StatusCode;
use thiserror::Error;

/// Fixed reason reported when a daemon reply has neither `result` nor `error`.
pub const MISSING_RESULT_AND_ERROR: &str = "response carried neither `result` nor `error`";

/// Failure of the HTTP exchange itself.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Status(StatusCode),

    #[error("invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a failed wallet RPC call.
///
/// Every public operation of [`crate::WalletRpcClient`] reports failure
/// through exactly one of these variants; operations never add kinds of
/// their own.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The daemon could not be reached or did not answer with JSON.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The daemon answered with a JSON-RPC `error` object.
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The daemon answered with JSON that is not a usable envelope.
    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },
}

impl RpcError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        RpcError::MalformedResponse {
            reason: reason.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, RpcError::Transport(_))
    }

    /// Daemon error code, when the failure came from the daemon.
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            RpcError::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type RpcResult<T> = Result<T, RpcError>;
