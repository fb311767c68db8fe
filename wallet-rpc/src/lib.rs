// lib.rs - Typed client for the Monero wallet JSON-RPC interface

pub mod amount;
pub mod api;
pub mod config;
pub mod errors;
pub mod jsonrpc;
pub mod methods;
pub mod transport;
pub mod wallet_client;

#[cfg(test)]
mod test_support;

// Re-export common types
pub use amount::{format_atomic_units, from_atomic_units, to_atomic_units, ATOMIC_UNITS_PER_XMR};
pub use api::types::*;
pub use config::ClientConfig;
pub use errors::{RpcError, RpcResult, TransportError};
pub use transport::{HttpTransport, Transport};
pub use wallet_client::WalletRpcClient;
