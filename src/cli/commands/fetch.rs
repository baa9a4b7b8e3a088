use crate::config::AppConfig;
use crate::decoder;
use crate::errors::{AppError, AppResult};
use crate::network::parse_network;
use crate::rpc::BitcoinRpcClient;
use clap::Args;
use tracing::info;

/// Fetch a transaction from Bitcoin Core RPC and decode it
#[derive(Args)]
pub struct FetchCommand {
    /// Transaction ID to fetch
    pub txid: String,

    /// Network the transaction belongs to (mainnet, testnet, regtest, signet)
    #[arg(long)]
    pub network: Option<String>,

    /// Bitcoin RPC URL (overrides config.toml)
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Bitcoin RPC username (overrides config.toml)
    #[arg(long)]
    pub rpc_username: Option<String>,

    /// Bitcoin RPC password (overrides config.toml)
    #[arg(long)]
    pub rpc_password: Option<String>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pub pretty: bool,
}

impl FetchCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = AppConfig::load()
            .map_err(|e| AppError::Config(format!("Failed to load configuration: {}", e)))?;

        // Build RPC configuration with CLI overrides
        let mut rpc_config = config.bitcoin_rpc;
        if let Some(url) = &self.rpc_url {
            rpc_config.url = url.clone();
        }
        if let Some(username) = &self.rpc_username {
            rpc_config.username = username.clone();
        }
        if let Some(password) = &self.rpc_password {
            rpc_config.password = password.clone();
        }

        let network_name = self
            .network
            .clone()
            .unwrap_or(config.decode.network);
        let network = parse_network(&network_name);

        info!("Fetching transaction {} from {}", self.txid, rpc_config.url);

        let client = BitcoinRpcClient::new(rpc_config).await?;
        let raw_tx_hex = client.get_raw_transaction_hex(&self.txid).await?;

        info!(
            "Fetched {} bytes of raw transaction data",
            raw_tx_hex.len() / 2
        );

        let decoded = decoder::decode_hex(&raw_tx_hex, network)?;

        let json = if self.pretty {
            serde_json::to_string_pretty(&decoded)?
        } else {
            serde_json::to_string(&decoded)?
        };
        println!("{}", json);

        Ok(())
    }
}
