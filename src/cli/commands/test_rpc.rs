use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::rpc::BitcoinRpcClient;
use clap::Args;
use tracing::{error, info};

/// Test Bitcoin RPC connectivity
#[derive(Args)]
pub struct TestRpcCommand {
    /// Bitcoin RPC URL
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Bitcoin RPC username
    #[arg(long)]
    pub rpc_username: Option<String>,

    /// Bitcoin RPC password
    #[arg(long)]
    pub rpc_password: Option<String>,
}

impl TestRpcCommand {
    pub async fn run(&self) -> AppResult<()> {
        let app_config = AppConfig::get_defaults();
        let mut rpc_config = app_config.bitcoin_rpc;

        // Override with CLI arguments
        if let Some(url) = &self.rpc_url {
            rpc_config.url = url.clone();
        }
        if let Some(username) = &self.rpc_username {
            rpc_config.username = username.clone();
        }
        if let Some(password) = &self.rpc_password {
            rpc_config.password = password.clone();
        }

        info!("Testing connection to: {}", rpc_config.url);

        match BitcoinRpcClient::new(rpc_config).await {
            Ok(client) => {
                client.test_connection().await.map_err(|e| {
                    error!("RPC connection test failed: {}", e);
                    AppError::Rpc(e)
                })?;
                println!("Bitcoin RPC connection test PASSED");
                Ok(())
            }
            Err(e) => {
                error!("Failed to create RPC client: {}", e);
                println!("Bitcoin RPC connection test FAILED");
                println!("Check that Bitcoin Core is running and the RPC URL and credentials are correct");
                Err(AppError::Rpc(e))
            }
        }
    }
}
