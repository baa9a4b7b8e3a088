//! Chain selection by network name
//!
//! Maps the network names accepted on the wire/CLI onto the `bitcoin`
//! crate's chain parameters. Unrecognised names fall back to mainnet.

use bitcoin::Network;

/// Resolve a network name to chain parameters
///
/// `regtest`, `testnet` (alias `test`) and `signet` select their chains;
/// anything else, including `mainnet` itself, selects mainnet.
pub fn parse_network(name: &str) -> Network {
    match name.to_ascii_lowercase().as_str() {
        "regtest" => Network::Regtest,
        "testnet" | "test" => Network::Testnet,
        "signet" => Network::Signet,
        _ => Network::Bitcoin,
    }
}
