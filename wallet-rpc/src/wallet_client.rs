//! Typed client for the Monero wallet daemon (`monero-wallet-rpc`).
//!
//! Each public method is one JSON-RPC call: it builds the params, runs its
//! row of [`crate::methods`] through the shared dispatch path and, for some
//! methods, hands back a single field of the result instead of the whole
//! object.
use std::sync::Arc;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use serde_json::Value;

use crate::api::types::{
    Balance, CreateWalletRequest, Destination, GetBulkPaymentsParams, GetPaymentsParams,
    IncomingTransfer, IncomingTransfersParams, KeyType, MakeIntegratedAddressRequest,
    OpenWalletRequest, Payment, QueryKeyParams, SplitIntegratedAddress,
    SplitIntegratedAddressParams, SweepAllParams, TransferOptions, TransferParams, TransferResult,
    TransferSplitResult, TransferType,
};
use crate::config::ClientConfig;
use crate::errors::{RpcError, RpcResult};
use crate::jsonrpc::{into_result, JsonRpcRequest};
use crate::methods::{self, Operation};
use crate::transport::{HttpTransport, Transport};

const NO_PARAMS: Option<()> = None;

/// Client for one wallet daemon.
///
/// Cloning is cheap and clones share the transport; calls on the same client
/// may run concurrently.
#[derive(Clone)]
pub struct WalletRpcClient {
    transport: Arc<dyn Transport>,
    endpoint: Option<Arc<str>>,
}

impl std::fmt::Debug for WalletRpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletRpcClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl WalletRpcClient {
    /// Create a client talking HTTP to the configured daemon.
    ///
    /// Inside a tokio runtime this also fires a detached balance query so
    /// the transport completes its first handshake before real calls.
    pub fn new(config: ClientConfig) -> RpcResult<Self> {
        let transport = HttpTransport::new(config)?;
        let client = WalletRpcClient {
            endpoint: Some(Arc::from(transport.endpoint())),
            transport: Arc::new(transport),
        };
        client.spawn_warm_up();
        Ok(client)
    }

    /// Create a client over a caller-supplied transport. No warm-up call is made.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        WalletRpcClient {
            transport,
            endpoint: None,
        }
    }

    /// URL of the daemon, when the client owns its HTTP transport.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    fn spawn_warm_up(&self) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("no tokio runtime, skipping warm-up call");
            return;
        };

        let client = self.clone();
        handle.spawn(async move {
            match client.get_balance().await {
                Ok(_) => tracing::debug!("warm-up call completed"),
                Err(error) => tracing::debug!(%error, "warm-up call failed"),
            }
        });
    }

    /// Create a new wallet file on the daemon.
    pub async fn create_wallet(&self, request: CreateWalletRequest) -> RpcResult<()> {
        self.invoke::<_, IgnoredAny>(methods::CREATE_WALLET, Some(request))
            .await?;
        Ok(())
    }

    /// Open an existing wallet file.
    pub async fn open_wallet(&self, request: OpenWalletRequest) -> RpcResult<()> {
        self.invoke::<_, IgnoredAny>(methods::OPEN_WALLET, Some(request))
            .await?;
        Ok(())
    }

    /// Store the open wallet and shut the daemon down.
    pub async fn stop_wallet(&self) -> RpcResult<()> {
        self.invoke::<_, IgnoredAny>(methods::STOP_WALLET, NO_PARAMS)
            .await?;
        Ok(())
    }

    /// Get wallet balance
    pub async fn get_balance(&self) -> RpcResult<Balance> {
        self.invoke(methods::GET_BALANCE, NO_PARAMS).await
    }

    /// Get the primary address of the open wallet
    pub async fn address(&self) -> RpcResult<String> {
        self.invoke(methods::GET_ADDRESS, NO_PARAMS).await
    }

    /// Send funds. Destination amounts are decimal XMR.
    pub async fn transfer(
        &self,
        destinations: &[Destination],
        options: TransferOptions,
    ) -> RpcResult<TransferResult> {
        let params = TransferParams::new(destinations, options);
        self.invoke(methods::TRANSFER, Some(params)).await
    }

    /// Send funds, letting the daemon split them over several transactions.
    pub async fn transfer_split(
        &self,
        destinations: &[Destination],
        options: TransferOptions,
    ) -> RpcResult<TransferSplitResult> {
        let params = TransferParams::split(destinations, options);
        self.invoke(methods::TRANSFER_SPLIT, Some(params)).await
    }

    /// Sweep unmixable dust outputs, returning the transaction hashes.
    pub async fn sweep_dust(&self) -> RpcResult<Vec<String>> {
        self.invoke_list(methods::SWEEP_DUST, NO_PARAMS).await
    }

    /// Send the whole unlocked balance to `address`.
    pub async fn sweep_all(&self, address: &str) -> RpcResult<TransferSplitResult> {
        self.invoke(methods::SWEEP_ALL, Some(SweepAllParams { address }))
            .await
    }

    /// Get payments received with a payment id
    pub async fn get_payments(&self, payment_id: &str) -> RpcResult<Vec<Payment>> {
        self.invoke_list(methods::GET_PAYMENTS, Some(GetPaymentsParams { payment_id }))
            .await
    }

    /// Get payments for several payment ids at or above `min_block_height`
    pub async fn get_bulk_payments(
        &self,
        payment_ids: &[String],
        min_block_height: u64,
    ) -> RpcResult<Vec<Payment>> {
        let params = GetBulkPaymentsParams {
            payment_ids,
            min_block_height,
        };
        self.invoke_list(methods::GET_BULK_PAYMENTS, Some(params))
            .await
    }

    /// List received outputs.
    pub async fn incoming_transfers(
        &self,
        transfer_type: TransferType,
    ) -> RpcResult<Vec<IncomingTransfer>> {
        let params = IncomingTransfersParams { transfer_type };
        self.invoke_list(methods::INCOMING_TRANSFERS, Some(params))
            .await
    }

    /// Export a key of the open wallet.
    pub async fn query_key(&self, key_type: KeyType) -> RpcResult<String> {
        self.invoke(methods::QUERY_KEY, Some(QueryKeyParams { key_type }))
            .await
    }

    /// Build an integrated address. The daemon picks a random payment id and
    /// the wallet's own address for fields left as `None`.
    pub async fn make_integrated_address(
        &self,
        request: MakeIntegratedAddressRequest,
    ) -> RpcResult<String> {
        self.invoke(methods::MAKE_INTEGRATED_ADDRESS, Some(request))
            .await
    }

    pub async fn split_integrated_address(
        &self,
        integrated_address: &str,
    ) -> RpcResult<SplitIntegratedAddress> {
        let params = SplitIntegratedAddressParams { integrated_address };
        self.invoke(methods::SPLIT_INTEGRATED_ADDRESS, Some(params))
            .await
    }

    /// Get the wallet's current block height
    pub async fn get_height(&self) -> RpcResult<u64> {
        self.invoke(methods::GET_HEIGHT, NO_PARAMS).await
    }

    /// Make a JSON-RPC call to the daemon and decode its `result`.
    ///
    /// Same path as every typed method; use it for daemon methods the client
    /// does not wrap.
    pub async fn call<P, T>(&self, method: &str, params: Option<P>) -> RpcResult<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let result = self.call_raw(method, params).await?;
        decode(method, result)
    }

    /// Run one operation row: call, then pick out its unwrap key if it has one.
    async fn invoke<P, T>(&self, operation: Operation, params: Option<P>) -> RpcResult<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let result = self.call_raw(operation.method, params).await?;
        let payload = match operation.unwrap {
            None => result,
            Some(key) => match result {
                Value::Object(mut fields) => fields.remove(key).unwrap_or(Value::Null),
                _ => Value::Null,
            },
        };
        decode(operation.method, payload)
    }

    /// Like [`Self::invoke`] for list fields the daemon leaves out when empty.
    async fn invoke_list<P, T>(&self, operation: Operation, params: Option<P>) -> RpcResult<Vec<T>>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let items: Option<Vec<T>> = self.invoke(operation, params).await?;
        Ok(items.unwrap_or_default())
    }

    async fn call_raw<P: Serialize>(&self, method: &str, params: Option<P>) -> RpcResult<Value> {
        let request = serde_json::to_value(JsonRpcRequest::new(method, params))
            .map_err(|e| RpcError::Transport(e.into()))?;

        tracing::trace!(method, "dispatching wallet rpc call");
        let body = self.transport.post_json(&request).await?;

        into_result(body).inspect_err(|error| {
            if let RpcError::Rpc { code, message } = error {
                tracing::debug!(method, code, %message, "wallet daemon returned an error");
            }
        })
    }
}

fn decode<T: DeserializeOwned>(method: &str, payload: Value) -> RpcResult<T> {
    serde_json::from_value(payload)
        .map_err(|e| RpcError::malformed(format!("unexpected `{}` result: {}", method, e)))
}
