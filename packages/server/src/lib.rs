//! Association store server library.
//!
//! Stores, per user, which payment method from a fixed catalog is connected
//! and the payment address that goes with it, and exposes it over HTTP.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run as run_server;
