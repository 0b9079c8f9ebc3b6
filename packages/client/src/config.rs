//! Command line / environment configuration for the client binary.

use std::time::Duration;

use clap::Parser;

/// Interactive client for connecting a payment method
#[derive(Debug, Clone, Parser)]
#[command(name = "paylink-client", version, about)]
pub struct ClientConfig {
    /// Base URL of the paylink server
    #[arg(long, env = "PAYLINK_SERVER_URL", default_value = "http://127.0.0.1:8080")]
    pub server_url: String,

    /// Stable identifier of the user whose payment method is managed
    #[arg(short, long, env = "PAYLINK_USER_ID")]
    pub user_id: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Use an in-process store instead of the server
    #[arg(long)]
    pub offline: bool,

    /// Default log level when RUST_LOG is unset
    #[arg(long, env = "PAYLINK_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
