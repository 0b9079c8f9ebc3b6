//! Client application errors.

use paylink_server::domain::ValueObjectError;
use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Invalid command line input
    #[error("Invalid configuration: {0}")]
    Config(#[from] ValueObjectError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Terminal input failed
    #[error("Input error: {0}")]
    Readline(#[from] ReadlineError),
}
