//! Shared utilities for the Paylink server and client.

pub mod logger;
pub mod time;
