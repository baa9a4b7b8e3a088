use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Bitcoin Raw Transaction Decoder
#[derive(Parser)]
#[command(name = "rawtx-decode")]
#[command(about = "Bitcoin raw transaction decoder")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Decode a raw transaction from hex (argument, file or stdin)
    Decode(commands::decode::DecodeCommand),
    /// Fetch a transaction from Bitcoin Core RPC and decode it
    Fetch(commands::fetch::FetchCommand),
    /// Test Bitcoin RPC connectivity
    TestRpc(commands::test_rpc::TestRpcCommand),
}

pub async fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Decode(command) => command.run(),
        Commands::Fetch(command) => command.run().await,
        Commands::TestRpc(command) => command.run().await,
    }
}
