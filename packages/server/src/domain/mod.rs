//! Domain layer for the association store.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod catalog;
pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use catalog::{Catalog, CatalogEntry};
pub use entity::{Association, PaymentBinding, User};
pub use error::{RepositoryError, ValueObjectError};
pub use repository::AssociationRepository;
pub use value_object::{MethodId, PaymentAddress, Timestamp, UserId};

#[cfg(test)]
pub use repository::MockAssociationRepository;
