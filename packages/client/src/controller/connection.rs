//! Connection controller: drives [`ConnectionState`] against an [`AssociationStore`].

use std::sync::Arc;

use paylink_server::domain::{Catalog, UserId};

use super::{
    error::ControllerError,
    phase::PendingRequest,
    state::ConnectionState,
    view::NextStage,
};
use crate::store::AssociationStore;

/// Owns the state machine and performs the store calls it asks for
pub struct ConnectionController<S> {
    store: S,
    state: ConnectionState,
}

impl<S: AssociationStore> ConnectionController<S> {
    /// Controller in `Idle`; call [`Self::load`] next
    pub fn new(store: S, user_id: UserId, catalog: Arc<Catalog>) -> Self {
        Self {
            store,
            state: ConnectionState::new(user_id, catalog),
        }
    }

    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Fetch the current association and initialize (or refresh) the state
    pub async fn load(&mut self) -> Result<(), ControllerError> {
        if self.state.phase().is_submitting() {
            return Err(ControllerError::Busy);
        }
        let result = self.store.fetch(self.state.user_id()).await;
        self.state.apply_fetched(result)?;
        tracing::debug!(
            "Loaded association for '{}': {}",
            self.state.user_id(),
            self.state.phase().name()
        );
        Ok(())
    }

    pub fn select(&mut self, method_id: &str) -> Result<(), ControllerError> {
        self.state.select(method_id)
    }

    pub fn edit_address(&mut self, text: impl Into<String>) -> Result<(), ControllerError> {
        self.state.edit_address(text)
    }

    /// Connect from `Editing`, disconnect from `Connected`
    pub async fn submit(&mut self) -> Result<(), ControllerError> {
        let request = self.state.begin_submit()?;
        self.send(request).await
    }

    /// Disconnect the active association; a no-op when nothing is connected
    pub async fn disconnect(&mut self) -> Result<(), ControllerError> {
        match self.state.begin_disconnect()? {
            Some(request) => self.send(request).await,
            None => Ok(()),
        }
    }

    /// Hand control to the next stage once connected
    pub fn proceed(&self) -> Result<NextStage, ControllerError> {
        let next = self.state.proceed()?;
        tracing::info!("User '{}' proceeding to verification", self.state.user_id());
        Ok(next)
    }

    async fn send(&mut self, request: PendingRequest) -> Result<(), ControllerError> {
        let user_id = self.state.user_id().clone();
        let result = match &request {
            PendingRequest::Connect { method_id, address } => {
                tracing::info!("Connecting '{}' for '{}'", method_id, user_id);
                self.store.upsert(&user_id, method_id, address).await
            }
            PendingRequest::Disconnect => {
                tracing::info!("Disconnecting payment method for '{}'", user_id);
                self.store.clear(&user_id).await
            }
        };
        self.state.complete(result)
    }
}
