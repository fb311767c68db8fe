use serde::{Deserialize, Serialize};

use crate::amount::to_atomic_units;

pub const DEFAULT_WALLET_FILENAME: &str = "monero_wallet";
pub const DEFAULT_WALLET_LANGUAGE: &str = "English";
pub const DEFAULT_MIXIN: u32 = 4;
pub const DEFAULT_UNLOCK_TIME: u64 = 0;

/// Transfer priority tiers understood by the wallet daemon.
pub struct Priority;

impl Priority {
    pub const DEFAULT: u32 = 0;
    pub const UNIMPORTANT: u32 = 1;
    pub const NORMAL: u32 = 2;
    pub const ELEVATED: u32 = 3;
}

// Requests

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CreateWalletRequest {
    pub filename: String,
    pub password: String,
    pub language: String,
}

impl Default for CreateWalletRequest {
    fn default() -> Self {
        Self {
            filename: DEFAULT_WALLET_FILENAME.to_string(),
            password: String::new(),
            language: DEFAULT_WALLET_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OpenWalletRequest {
    pub filename: String,
    pub password: String,
}

impl Default for OpenWalletRequest {
    fn default() -> Self {
        Self {
            filename: DEFAULT_WALLET_FILENAME.to_string(),
            password: String::new(),
        }
    }
}

impl OpenWalletRequest {
    pub fn new(filename: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            password: password.into(),
        }
    }
}

/// Transfer recipient with the amount in decimal XMR.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub amount: f64,
    pub address: String,
}

impl Destination {
    pub fn new(amount: f64, address: impl Into<String>) -> Self {
        Self {
            amount,
            address: address.into(),
        }
    }

    /// Wire form of this destination, amount in atomic units.
    pub fn atomic(&self) -> AtomicDestination {
        AtomicDestination {
            amount: to_atomic_units(self.amount),
            address: self.address.clone(),
        }
    }
}

/// Transfer recipient as sent to the daemon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AtomicDestination {
    pub amount: u64,
    pub address: String,
}

/// Optional knobs for `transfer` and `transfer_split`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferOptions {
    pub mixin: u32,
    pub unlock_time: u64,
    pub payment_id: Option<String>,
    pub do_not_relay: bool,
    pub priority: u32,
    pub get_tx_hex: bool,
    pub get_tx_key: bool,
    /// Only sent with `transfer_split`.
    pub new_algorithm: bool,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            mixin: DEFAULT_MIXIN,
            unlock_time: DEFAULT_UNLOCK_TIME,
            payment_id: None,
            do_not_relay: false,
            priority: Priority::DEFAULT,
            get_tx_hex: false,
            get_tx_key: false,
            new_algorithm: false,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TransferParams {
    pub destinations: Vec<AtomicDestination>,
    pub mixin: u32,
    pub unlock_time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    pub do_not_relay: bool,
    pub priority: u32,
    pub get_tx_hex: bool,
    pub get_tx_key: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_algorithm: Option<bool>,
}

impl TransferParams {
    /// Converts every destination amount to atomic units exactly once.
    pub fn new(destinations: &[Destination], options: TransferOptions) -> Self {
        Self {
            destinations: destinations.iter().map(Destination::atomic).collect(),
            mixin: options.mixin,
            unlock_time: options.unlock_time,
            payment_id: options.payment_id,
            do_not_relay: options.do_not_relay,
            priority: options.priority,
            get_tx_hex: options.get_tx_hex,
            get_tx_key: options.get_tx_key,
            new_algorithm: None,
        }
    }

    pub fn split(destinations: &[Destination], options: TransferOptions) -> Self {
        let new_algorithm = options.new_algorithm;
        Self {
            new_algorithm: Some(new_algorithm),
            ..Self::new(destinations, options)
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SweepAllParams<'a> {
    pub address: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetPaymentsParams<'a> {
    pub payment_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetBulkPaymentsParams<'a> {
    pub payment_ids: &'a [String],
    pub min_block_height: u64,
}

/// Which outputs `incoming_transfers` should list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    #[default]
    All,
    Available,
    Unavailable,
}

#[derive(Debug, Serialize)]
pub(crate) struct IncomingTransfersParams {
    pub transfer_type: TransferType,
}

/// Secret material `query_key` can return.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    Mnemonic,
    ViewKey,
    SpendKey,
}

#[derive(Debug, Serialize)]
pub(crate) struct QueryKeyParams {
    pub key_type: KeyType,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MakeIntegratedAddressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
}

impl MakeIntegratedAddressRequest {
    pub fn with_payment_id(payment_id: impl Into<String>) -> Self {
        Self {
            standard_address: None,
            payment_id: Some(payment_id.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SplitIntegratedAddressParams<'a> {
    pub integrated_address: &'a str,
}

// Responses

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Balance {
    pub balance: u64,
    pub unlocked_balance: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransferResult {
    pub tx_hash: String,
    #[serde(default)]
    pub tx_key: String,
    #[serde(default)]
    pub amount: u64,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub tx_blob: String,
    #[serde(default)]
    pub tx_metadata: String,
}

/// Batch outcome of `transfer_split` and `sweep_all`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TransferSplitResult {
    pub tx_hash_list: Vec<String>,
    pub tx_key_list: Vec<String>,
    pub amount_list: Vec<u64>,
    pub fee_list: Vec<u64>,
    pub tx_blob_list: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubaddressIndex {
    pub major: u32,
    pub minor: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payment {
    pub payment_id: String,
    pub tx_hash: String,
    pub amount: u64,
    pub block_height: u64,
    pub unlock_time: u64,
    #[serde(default)]
    pub subaddr_index: SubaddressIndex,
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IncomingTransfer {
    pub amount: u64,
    pub spent: bool,
    pub global_index: u64,
    pub tx_hash: String,
    #[serde(default)]
    pub tx_size: u64,
    #[serde(default)]
    pub key_image: String,
    #[serde(default)]
    pub subaddr_index: SubaddressIndex,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitIntegratedAddress {
    pub standard_address: String,
    pub payment_id: String,
    #[serde(default)]
    pub is_subaddress: bool,
}
