//! Paylink interactive client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin paylink-client -- --user-id 1001
//! ```

use clap::Parser;
use paylink_client::{ClientConfig, cli::Flow};
use paylink_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ClientConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    match paylink_client::run_client(config).await {
        Ok(Flow::Proceeded) => println!("Next step: verify"),
        Ok(_) => {}
        Err(e) => {
            tracing::error!("Client error: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
