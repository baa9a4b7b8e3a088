use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Hex decoding of a raw transaction payload
    #[error("Hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Consensus deserialisation of transaction bytes
    #[error("Transaction decode error: {0}")]
    Decode(#[from] bitcoin::consensus::encode::Error),

    /// Bitcoin RPC operations
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// RPC error types
#[derive(Error, Debug)]
pub enum RpcError {
    /// Failed to establish connection to Bitcoin Core RPC server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// TXID string format is invalid (not valid hex or wrong length)
    #[error("Invalid txid: {txid}")]
    InvalidTxid { txid: String },

    /// RPC method call failed (covers network errors, authentication, etc.)
    #[error("RPC call failed: {method} - {message}")]
    CallFailed { method: String, message: String },

    /// Retry limit exceeded for RPC operation
    #[error("Max retries exceeded: {operation}")]
    MaxRetriesExceeded { operation: String },

    /// RPC request timed out
    #[error("Request timeout: {timeout_seconds}s for {operation}")]
    Timeout {
        timeout_seconds: u64,
        operation: String,
    },

    /// Transaction exists in valid format but not found in blockchain/mempool
    #[error("Transaction not found: {txid}")]
    TransactionNotFound { txid: String },
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for RPC operations
pub type RpcResult<T> = Result<T, RpcError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}
