//! Repository trait for association storage.
//!
//! The domain layer owns this abstraction; infrastructure provides the
//! implementation (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::{Association, PaymentBinding, User},
    error::RepositoryError,
    value_object::{Timestamp, UserId},
};

/// Storage of users and their payment association.
///
/// Every mutating operation must update the method and the address together.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssociationRepository: Send + Sync {
    /// Read the user's association. `UserNotFound` for unknown users.
    async fn fetch(&self, user_id: &UserId) -> Result<Association, RepositoryError>;

    /// Set method and address in one step, creating the user if needed.
    async fn upsert(
        &self,
        user_id: &UserId,
        binding: PaymentBinding,
        now: Timestamp,
    ) -> Result<Association, RepositoryError>;

    /// Remove the binding. Succeeds when already clear.
    async fn clear(&self, user_id: &UserId) -> Result<Association, RepositoryError>;

    /// Insert `user` unless a user with the same id exists; returns the stored user.
    async fn register(&self, user: User) -> Result<User, RepositoryError>;

    /// Read a full user record
    async fn get_user(&self, user_id: &UserId) -> Result<User, RepositoryError>;
}
