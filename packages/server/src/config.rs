//! Command line / environment configuration for the server binary.

use clap::Parser;

/// Paylink association store server
#[derive(Debug, Clone, Parser)]
#[command(name = "paylink-server", version, about)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "PAYLINK_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PAYLINK_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Default log level when RUST_LOG is unset
    #[arg(long, env = "PAYLINK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// `host:port` string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
