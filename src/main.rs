#[tokio::main]
async fn main() {
    if let Err(e) = rawtx_decode::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
