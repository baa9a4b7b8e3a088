use crate::config::BitcoinRpcConfig;
use crate::errors::{RpcError, RpcResult};
use crate::rpc::{calculate_next_backoff, call_blocking};
use corepc_client::bitcoin::Txid;
use corepc_client::client_sync::{v28::Client, Auth};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Bitcoin RPC client with retry logic for one-shot fetches
pub struct BitcoinRpcClient {
    client: Arc<Client>,
    config: BitcoinRpcConfig,
}

impl BitcoinRpcClient {
    /// Create a new RPC client and verify connectivity
    pub async fn new(config: BitcoinRpcConfig) -> RpcResult<Self> {
        let client = Self::create_sync_client(&config)?;

        // Test connection before handing the client out
        let test_client = Arc::clone(&client);
        call_blocking("get_blockchain_info", config.timeout_seconds, move || {
            test_client.get_blockchain_info().map_err(|e| {
                RpcError::ConnectionFailed(format!(
                    "Failed to connect to Bitcoin RPC - check URL, credentials, and that Bitcoin Core is running: {}",
                    e
                ))
            })?;
            Ok(())
        })
        .await?;

        info!("Bitcoin RPC connection established successfully");

        Ok(Self { client, config })
    }

    /// Fetch the raw hex serialisation of a transaction, with retries
    pub async fn get_raw_transaction_hex(&self, txid: &str) -> RpcResult<String> {
        let tx_hash = Txid::from_str(txid).map_err(|_| RpcError::InvalidTxid {
            txid: txid.to_string(),
        })?;

        let mut attempts = 0;
        let mut backoff = Duration::from_millis(self.config.initial_backoff_ms);

        loop {
            let client = Arc::clone(&self.client);

            let result = call_blocking(
                "get_raw_transaction",
                self.config.timeout_seconds,
                move || {
                    let raw = client
                        .get_raw_transaction(tx_hash)
                        .map_err(|e| RpcError::CallFailed {
                            method: "get_raw_transaction".to_string(),
                            message: e.to_string(),
                        })?;
                    Ok(raw.0)
                },
            )
            .await;

            match result {
                Ok(raw_hex) => {
                    if attempts > 0 {
                        debug!(
                            "Successfully retrieved transaction {} after {} attempts",
                            txid,
                            attempts + 1
                        );
                    }
                    return Ok(raw_hex);
                }
                Err(e) => {
                    // Transaction-not-found is not retryable
                    let message = e.to_string();
                    if message.contains("No such mempool or blockchain transaction")
                        || message.contains("Invalid or non-wallet transaction id")
                    {
                        debug!("Transaction {} not found: {}", txid, e);
                        return Err(RpcError::TransactionNotFound {
                            txid: txid.to_string(),
                        });
                    }

                    attempts += 1;
                    if attempts >= self.config.max_retries {
                        warn!(
                            "Failed to get transaction {} after {} attempts: {}",
                            txid, attempts, e
                        );
                        return Err(RpcError::MaxRetriesExceeded {
                            operation: format!("get_raw_transaction({})", txid),
                        });
                    }

                    warn!(
                        "RPC attempt {} failed for transaction {}, retrying in {:?}: {}",
                        attempts, txid, backoff, e
                    );
                    sleep(backoff).await;

                    backoff = calculate_next_backoff(
                        backoff,
                        self.config.backoff_multiplier,
                        self.config.max_backoff_seconds,
                    );
                }
            }
        }
    }

    /// Test RPC connection
    pub async fn test_connection(&self) -> RpcResult<()> {
        let client = Arc::clone(&self.client);

        call_blocking("get_blockchain_info", self.config.timeout_seconds, move || {
            let info = client
                .get_blockchain_info()
                .map_err(|e| RpcError::CallFailed {
                    method: "get_blockchain_info".to_string(),
                    message: e.to_string(),
                })?;
            debug!(
                "Bitcoin Core connection test successful - chain: {}, blocks: {}",
                info.chain, info.blocks
            );
            Ok(())
        })
        .await
    }

    /// Create the synchronous client wrapped for blocking-pool use
    fn create_sync_client(config: &BitcoinRpcConfig) -> RpcResult<Arc<Client>> {
        let auth = Auth::UserPass(config.username.clone(), config.password.clone());
        let client = Client::new_with_auth(&config.url, auth).map_err(|e| {
            RpcError::ConnectionFailed(format!("Failed to create Bitcoin RPC client: {}", e))
        })?;

        Ok(Arc::new(client))
    }
}
