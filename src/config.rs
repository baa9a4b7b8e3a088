use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub decode: DecodeConfig,
    pub bitcoin_rpc: BitcoinRpcConfig,
}

/// Decoding defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Network name used when no --network flag is given
    pub network: String,
}

/// Bitcoin RPC configuration for the fetch command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BitcoinRpcConfig {
    pub url: String,
    pub username: String,
    pub password: String,
    pub timeout_seconds: u64,
    pub max_retries: usize,
    pub initial_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub max_backoff_seconds: u64,
}

impl Default for BitcoinRpcConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8332".to_string(),
            username: "bitcoin".to_string(),
            password: "password".to_string(),
            timeout_seconds: 60,
            max_retries: 10,
            initial_backoff_ms: 100,
            backoff_multiplier: 2.0,
            max_backoff_seconds: 30,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = BitcoinRpcConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default("decode.network", "mainnet")?
            // Bitcoin RPC defaults
            .set_default("bitcoin_rpc.url", defaults.url)?
            .set_default("bitcoin_rpc.username", defaults.username)?
            .set_default("bitcoin_rpc.password", defaults.password)?
            .set_default("bitcoin_rpc.timeout_seconds", defaults.timeout_seconds)?
            .set_default("bitcoin_rpc.max_retries", defaults.max_retries as i64)?
            .set_default(
                "bitcoin_rpc.initial_backoff_ms",
                defaults.initial_backoff_ms,
            )?
            .set_default(
                "bitcoin_rpc.backoff_multiplier",
                defaults.backoff_multiplier,
            )?
            .set_default(
                "bitcoin_rpc.max_backoff_seconds",
                defaults.max_backoff_seconds,
            )?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // BITCOIN_RPC_* env variables can override RPC settings
            .add_source(config::Environment::with_prefix("BITCOIN_RPC"))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Check for specific environment variables with custom names
        if let Ok(network) = env::var("RAWTX_NETWORK") {
            app_config.decode.network = network;
        }

        if let Ok(url) = env::var("BITCOIN_RPC_URL") {
            app_config.bitcoin_rpc.url = url;
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Self {
        // Try to load config for defaults, but don't fail if not found
        Self::load().unwrap_or_else(|_| Self {
            decode: DecodeConfig {
                network: "mainnet".to_string(),
            },
            bitcoin_rpc: BitcoinRpcConfig::default(),
        })
    }
}
