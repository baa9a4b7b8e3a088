//! Result structures for decoded transactions
//!
//! These DTOs serialise to the JSON shape of Bitcoin Core's
//! `decoderawtransaction` result. Field names and omission rules follow
//! that format: optional fields are dropped from the JSON entirely rather
//! than serialised as null or empty.

use serde::{Deserialize, Serialize};

/// Decoded transaction result
///
/// Top-level reply structure: transaction identity, sizes and the
/// reshaped input/output lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedTransaction {
    pub txid: String,
    pub version: i32,
    pub locktime: u32,
    /// Serialised size without witness data
    #[serde(rename = "sizestripped")]
    pub size_stripped: usize,
    /// Full serialised size
    pub size: usize,
    pub vin: Vec<Vin>,
    pub vout: Vec<Vout>,
}

/// JSON representation of a transaction input
///
/// A coinbase entry carries only `coinbase`, `sequence` and (when
/// present) `txinwitness`; a regular entry carries the previous outpoint
/// and signature script instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coinbase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub txid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vout: Option<u32>,
    #[serde(rename = "scriptSig", skip_serializing_if = "Option::is_none")]
    pub script_sig: Option<ScriptSig>,
    pub sequence: u32,
    #[serde(rename = "txinwitness", skip_serializing_if = "Option::is_none")]
    pub witness: Option<Vec<String>>,
}

impl Vin {
    /// Whether this entry represents a coinbase input
    pub fn is_coinbase(&self) -> bool {
        self.coinbase.is_some()
    }
}

/// Signature script in both disassembled and raw hex form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptSig {
    pub asm: String,
    pub hex: String,
}

/// JSON representation of a transaction output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vout {
    /// Output value in BTC
    pub value: f64,
    /// Output index within the transaction
    pub n: u32,
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: ScriptPubKey,
}

/// Locking script with disassembly, classification and addresses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptPubKey {
    pub asm: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hex: String,
    /// Number of signatures required to spend (absent for nulldata and
    /// nonstandard scripts)
    #[serde(rename = "reqSigs", skip_serializing_if = "Option::is_none")]
    pub req_sigs: Option<u32>,
    #[serde(rename = "type")]
    pub script_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<String>,
}
