//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// UserId validation error
    #[error("UserId cannot be empty")]
    UserIdEmpty,

    /// UserId too long error
    #[error("UserId cannot exceed {max} characters (got {actual})")]
    UserIdTooLong { max: usize, actual: usize },

    /// MethodId validation error
    #[error("MethodId cannot be empty")]
    MethodIdEmpty,

    /// MethodId is not part of the payment method catalog
    #[error("Unknown payment method: {0}")]
    UnknownMethod(String),

    /// PaymentAddress validation error
    #[error("PaymentAddress cannot be empty")]
    AddressEmpty,

    /// PaymentAddress too long error
    #[error("PaymentAddress cannot exceed {max} characters (got {actual})")]
    AddressTooLong { max: usize, actual: usize },
}

/// Errors raised by an association repository
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No record exists for the user
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Backing storage failed
    #[error("Storage failure: {0}")]
    Storage(String),
}
