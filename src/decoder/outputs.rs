//! Output list construction
//!
//! Reshapes a transaction's outputs into `Vout` entries: value in BTC,
//! original output index, and the `scriptPubKey` object with
//! disassembly, classification and extracted addresses. An optional
//! address filter restricts the list to outputs paying into a given
//! address set; filtered-out entries keep the indices of the survivors
//! intact.

use std::collections::HashSet;

use bitcoin::{Network, Transaction};

use crate::script::{classify, disassemble, extract_addresses};
use crate::types::{ScriptPubKey, Vout};

/// Build the `vout` entries for a transaction
///
/// `filter_addrs` of `None` or an empty set disables filtering.
pub fn build_vout_list(
    tx: &Transaction,
    network: Network,
    filter_addrs: Option<&HashSet<String>>,
) -> Vec<Vout> {
    let mut vout_list = Vec::with_capacity(tx.output.len());

    for (n, txout) in tx.output.iter().enumerate() {
        let script = &txout.script_pubkey;
        let class = classify(script);
        let (addresses, req_sigs) = extract_addresses(script, &class, network);

        let passes_filter = match filter_addrs {
            None => true,
            Some(wanted) if wanted.is_empty() => true,
            Some(wanted) => addresses.iter().any(|address| wanted.contains(address)),
        };
        if !passes_filter {
            continue;
        }

        vout_list.push(Vout {
            value: txout.value.to_btc(),
            n: n as u32,
            script_pub_key: ScriptPubKey {
                asm: disassemble(script),
                hex: hex::encode(script.as_bytes()),
                req_sigs,
                script_type: class.to_string(),
                addresses,
            },
        });
    }

    vout_list
}
