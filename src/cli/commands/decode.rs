use crate::decoder;
use crate::errors::{AppError, AppResult};
use crate::network::parse_network;
use clap::Args;
use std::collections::HashSet;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

/// Decode a raw transaction from hex
#[derive(Args)]
pub struct DecodeCommand {
    /// Raw transaction hex (reads from --file or stdin when omitted)
    pub raw_tx: Option<String>,

    /// Read the raw transaction hex from a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Network the transaction belongs to (mainnet, testnet, regtest, signet)
    #[arg(long, default_value = "mainnet")]
    pub network: String,

    /// Pretty-print the JSON result
    #[arg(long)]
    pub pretty: bool,

    /// Only include outputs paying to this address (repeatable)
    #[arg(long = "filter-addr")]
    pub filter_addrs: Vec<String>,
}

impl DecodeCommand {
    pub fn run(&self) -> AppResult<()> {
        let raw_tx_hex = self.read_raw_tx_hex()?;
        let network = parse_network(&self.network);

        info!(
            "Decoding {} bytes of hex for network {:?}",
            raw_tx_hex.trim().len(),
            network
        );

        let raw_tx = hex::decode(raw_tx_hex.trim())?;
        let tx: bitcoin::Transaction = bitcoin::consensus::deserialize(&raw_tx)?;

        let filter_set: HashSet<String> = self.filter_addrs.iter().cloned().collect();
        let filter = (!filter_set.is_empty()).then_some(&filter_set);
        let decoded = decoder::decode_transaction_with_filter(&tx, network, filter);

        let json = if self.pretty {
            serde_json::to_string_pretty(&decoded)?
        } else {
            serde_json::to_string(&decoded)?
        };
        println!("{}", json);

        Ok(())
    }

    fn read_raw_tx_hex(&self) -> AppResult<String> {
        if let Some(raw_tx) = &self.raw_tx {
            return Ok(raw_tx.clone());
        }

        if let Some(path) = &self.file {
            info!("Reading raw transaction hex from {}", path.display());
            return Ok(std::fs::read_to_string(path)?);
        }

        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        if buffer.trim().is_empty() {
            return Err(AppError::InvalidData(
                "No raw transaction hex given on the command line, via --file, or on stdin"
                    .to_string(),
            ));
        }
        Ok(buffer)
    }
}
