//! Input list construction
//!
//! Reshapes a transaction's inputs into `Vin` entries. Coinbase
//! transactions only have a single input by definition, carried as the
//! hex of its signature script rather than an outpoint reference.

use bitcoin::{Transaction, Witness};

use crate::script::disassemble;
use crate::types::{ScriptSig, Vin};

/// Build the `vin` entries for a transaction
pub fn build_vin_list(tx: &Transaction) -> Vec<Vin> {
    if tx.is_coinbase() {
        let txin = &tx.input[0];
        return vec![Vin {
            coinbase: Some(hex::encode(txin.script_sig.as_bytes())),
            sequence: txin.sequence.to_consensus_u32(),
            witness: witness_to_hex(&txin.witness),
            ..Default::default()
        }];
    }

    let has_witness = tx.input.iter().any(|txin| !txin.witness.is_empty());

    tx.input
        .iter()
        .map(|txin| Vin {
            txid: Some(txin.previous_output.txid.to_string()),
            vout: Some(txin.previous_output.vout),
            script_sig: Some(ScriptSig {
                asm: disassemble(&txin.script_sig),
                hex: hex::encode(txin.script_sig.as_bytes()),
            }),
            sequence: txin.sequence.to_consensus_u32(),
            witness: if has_witness {
                witness_to_hex(&txin.witness)
            } else {
                None
            },
            ..Default::default()
        })
        .collect()
}

/// Format a witness stack as hex-encoded strings
///
/// Returns `None` for an empty stack so the field can be omitted from
/// the JSON result rather than serialised as an empty array.
pub fn witness_to_hex(witness: &Witness) -> Option<Vec<String>> {
    if witness.is_empty() {
        return None;
    }

    Some(witness.iter().map(hex::encode).collect())
}
