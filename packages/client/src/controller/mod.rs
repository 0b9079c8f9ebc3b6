//! Payment-method connection controller.

pub mod connection;
pub mod error;
pub mod phase;
pub mod state;
pub mod view;

pub use connection::ConnectionController;
pub use error::ControllerError;
pub use phase::{PendingRequest, Phase};
pub use state::ConnectionState;
pub use view::{EntryView, NextStage};
