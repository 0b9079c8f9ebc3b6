//! Client-side view of the association store.
//!
//! The controller only talks to this trait; the store's answer is the only
//! source of truth for whether a connect or disconnect happened.

pub mod http;
pub mod local;

use async_trait::async_trait;
use paylink_server::domain::{Association, MethodId, PaymentAddress, UserId};
use thiserror::Error;

pub use http::HttpAssociationStore;
pub use local::LocalAssociationStore;

/// Failure of a store call, as seen by the controller
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The user has no record yet
    #[error("No association found: {0}")]
    NotFound(String),

    /// The store rejected the write
    #[error("Rejected by store: {0}")]
    Validation(String),

    /// Network or server failure
    #[error("Store unavailable: {0}")]
    Transient(String),
}

impl StoreError {
    /// Whether re-issuing the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient(_))
    }
}

/// Async get/set/clear of one user's (method, address) pair
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssociationStore: Send + Sync {
    /// Current association; `NotFound` for unknown users
    async fn fetch(&self, user_id: &UserId) -> Result<Association, StoreError>;

    /// Store method and address together
    async fn upsert(
        &self,
        user_id: &UserId,
        method_id: &MethodId,
        address: &PaymentAddress,
    ) -> Result<Association, StoreError>;

    /// Clear method and address together
    async fn clear(&self, user_id: &UserId) -> Result<Association, StoreError>;
}
