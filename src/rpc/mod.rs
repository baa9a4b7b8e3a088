//! Bitcoin Core RPC integration
//!
//! - **Client** - RPC client used by the fetch command, with retry logic
//! - **Retry** - Exponential backoff and blocking-call timeout helpers
//!
//! The client uses the `corepc-client` crate; blocking calls are wrapped
//! in `spawn_blocking` with a timeout so the async CLI stays responsive.

pub mod client;
pub mod retry;

pub use client::BitcoinRpcClient;
pub use retry::{calculate_next_backoff, call_blocking};
