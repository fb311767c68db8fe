//! Wallet operations as `{rpc method, unwrap key}` rows.

/// How one public operation maps onto the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub method: &'static str,
    /// Key of the `result` field handed back to the caller instead of the
    /// whole object.
    pub unwrap: Option<&'static str>,
}

impl Operation {
    const fn pass_through(method: &'static str) -> Self {
        Operation {
            method,
            unwrap: None,
        }
    }

    const fn unwrapping(method: &'static str, key: &'static str) -> Self {
        Operation {
            method,
            unwrap: Some(key),
        }
    }
}

pub const CREATE_WALLET: Operation = Operation::pass_through("create_wallet");
pub const OPEN_WALLET: Operation = Operation::pass_through("open_wallet");
pub const STOP_WALLET: Operation = Operation::pass_through("stop_wallet");
pub const GET_BALANCE: Operation = Operation::pass_through("get_balance");
pub const GET_ADDRESS: Operation = Operation::unwrapping("get_address", "address");
pub const TRANSFER: Operation = Operation::pass_through("transfer");
pub const TRANSFER_SPLIT: Operation = Operation::pass_through("transfer_split");
pub const SWEEP_DUST: Operation = Operation::unwrapping("sweep_dust", "tx_hash_list");
pub const SWEEP_ALL: Operation = Operation::pass_through("sweep_all");
pub const GET_PAYMENTS: Operation = Operation::unwrapping("get_payments", "payments");
pub const GET_BULK_PAYMENTS: Operation = Operation::unwrapping("get_bulk_payments", "payments");
pub const INCOMING_TRANSFERS: Operation =
    Operation::unwrapping("incoming_transfers", "transfers");
pub const QUERY_KEY: Operation = Operation::unwrapping("query_key", "key");
pub const MAKE_INTEGRATED_ADDRESS: Operation =
    Operation::unwrapping("make_integrated_address", "integrated_address");
pub const SPLIT_INTEGRATED_ADDRESS: Operation = Operation::pass_through("split_integrated_address");
pub const GET_HEIGHT: Operation = Operation::unwrapping("getheight", "height");

/// Every operation the client exposes.
pub const ALL: [Operation; 16] = [
    CREATE_WALLET,
    OPEN_WALLET,
    STOP_WALLET,
    GET_BALANCE,
    GET_ADDRESS,
    TRANSFER,
    TRANSFER_SPLIT,
    SWEEP_DUST,
    SWEEP_ALL,
    GET_PAYMENTS,
    GET_BULK_PAYMENTS,
    INCOMING_TRANSFERS,
    QUERY_KEY,
    MAKE_INTEGRATED_ADDRESS,
    SPLIT_INTEGRATED_ADDRESS,
    GET_HEIGHT,
];
