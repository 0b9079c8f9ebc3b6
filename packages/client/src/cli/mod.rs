//! Interactive command line front end.

pub mod command;
pub mod render;
pub mod repl;

pub use repl::{Flow, run_session};
