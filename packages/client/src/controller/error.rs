use paylink_server::domain::{MethodId, ValueObjectError};
use thiserror::Error;

use crate::store::StoreError;

/// Reasons the controller refuses an action or reports a failed request.
///
/// Every refusal leaves the state untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// The initial fetch has not completed
    #[error("Still loading the current payment method")]
    NotReady,

    /// A request is already in flight
    #[error("A request is already in progress")]
    Busy,

    /// Another method is connected; disconnect it first
    #[error("Payment method '{active}' is connected; disconnect it first")]
    SelectionLocked { active: MethodId },

    #[error("Unknown payment method: {0}")]
    UnknownMethod(String),

    /// Address edits need an open editor
    #[error("No payment method is selected for editing")]
    NotEditing,

    #[error("Select a payment method first")]
    NothingSelected,

    /// Address rejected before reaching the store
    #[error("Invalid payment address: {0}")]
    InputInvalid(ValueObjectError),

    /// Proceeding needs a confirmed association
    #[error("No payment method is connected")]
    NotConnected,

    /// A response arrived without a request in flight
    #[error("No request is in progress")]
    NoRequestInFlight,

    /// The store call failed; the previous phase was restored
    #[error(transparent)]
    Store(#[from] StoreError),
}
