//! Raw transaction decoding
//!
//! Entry points for reshaping a Bitcoin transaction into the JSON-friendly
//! `DecodedTransaction` result. Wire-format parsing is delegated to the
//! `bitcoin` crate's consensus deserialisation; this module accepts a
//! transaction as raw bytes, as a hex string, or already parsed, and maps
//! it into the response DTOs.

use std::collections::HashSet;

use bitcoin::consensus::deserialize;
use bitcoin::{Network, Transaction};

use crate::errors::AppResult;
use crate::types::DecodedTransaction;

pub mod inputs;
pub mod outputs;

pub use inputs::{build_vin_list, witness_to_hex};
pub use outputs::build_vout_list;

/// Decode an already-parsed transaction
pub fn decode_transaction(tx: &Transaction, network: Network) -> DecodedTransaction {
    decode_transaction_with_filter(tx, network, None)
}

/// Decode an already-parsed transaction, restricting the output list to
/// outputs paying into `filter_addrs`
pub fn decode_transaction_with_filter(
    tx: &Transaction,
    network: Network,
    filter_addrs: Option<&HashSet<String>>,
) -> DecodedTransaction {
    DecodedTransaction {
        txid: tx.compute_txid().to_string(),
        version: tx.version.0,
        locktime: tx.lock_time.to_consensus_u32(),
        size: tx.total_size(),
        size_stripped: tx.base_size(),
        vin: build_vin_list(tx),
        vout: build_vout_list(tx, network, filter_addrs),
    }
}

/// Decode a transaction from raw consensus bytes
pub fn decode_raw_bytes(raw_tx: &[u8], network: Network) -> AppResult<DecodedTransaction> {
    let tx: Transaction = deserialize(raw_tx)?;
    Ok(decode_transaction(&tx, network))
}

/// Decode a transaction from a hex string
pub fn decode_hex(raw_tx_hex: &str, network: Network) -> AppResult<DecodedTransaction> {
    let raw_tx = hex::decode(raw_tx_hex.trim())?;
    decode_raw_bytes(&raw_tx, network)
}
