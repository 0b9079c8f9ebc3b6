//! In-process [`AssociationStore`] that calls the server use cases directly.
//!
//! Used by the CLI's `--offline` mode and by tests that need a real store
//! without a network hop.

use std::sync::Arc;

use async_trait::async_trait;
use paylink_server::{
    domain::{
        Association, AssociationRepository, Catalog, MethodId, PaymentAddress, UserId,
    },
    infrastructure::repository::InMemoryAssociationRepository,
    usecase::{
        AssociationError, ConnectPaymentMethodUseCase, DisconnectPaymentMethodUseCase,
        FetchAssociationUseCase,
    },
};

use super::{AssociationStore, StoreError};

/// Store backed by a repository living in the same process
#[derive(Clone)]
pub struct LocalAssociationStore {
    repository: Arc<dyn AssociationRepository>,
    catalog: Arc<Catalog>,
}

impl LocalAssociationStore {
    pub fn new(repository: Arc<dyn AssociationRepository>, catalog: Arc<Catalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Fresh in-memory store with the default catalog
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryAssociationRepository::default()),
            Arc::new(Catalog::default()),
        )
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.clone()
    }
}

impl From<AssociationError> for StoreError {
    fn from(err: AssociationError) -> Self {
        match err {
            AssociationError::Validation(e) => Self::Validation(e.to_string()),
            AssociationError::NotFound(id) => Self::NotFound(id),
            AssociationError::Storage(msg) => Self::Transient(msg),
        }
    }
}

#[async_trait]
impl AssociationStore for LocalAssociationStore {
    async fn fetch(&self, user_id: &UserId) -> Result<Association, StoreError> {
        Ok(FetchAssociationUseCase::new(self.repository.clone())
            .execute(user_id.clone())
            .await?)
    }

    async fn upsert(
        &self,
        user_id: &UserId,
        method_id: &MethodId,
        address: &PaymentAddress,
    ) -> Result<Association, StoreError> {
        Ok(
            ConnectPaymentMethodUseCase::new(self.repository.clone(), self.catalog.clone())
                .execute(user_id.clone(), method_id.clone(), address.clone())
                .await?,
        )
    }

    async fn clear(&self, user_id: &UserId) -> Result<Association, StoreError> {
        Ok(DisconnectPaymentMethodUseCase::new(self.repository.clone())
            .execute(user_id.clone())
            .await?)
    }
}
