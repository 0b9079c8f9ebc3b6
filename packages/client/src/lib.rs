//! Payment-method connection client.
//!
//! [`controller`] holds the connection state machine, [`store`] the
//! abstraction over the association store it talks to, and [`cli`] an
//! interactive front end.

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod store;

use std::sync::Arc;

use paylink_server::domain::{Catalog, UserId};

pub use config::ClientConfig;
pub use error::ClientError;

use crate::{
    cli::Flow,
    controller::ConnectionController,
    store::{HttpAssociationStore, LocalAssociationStore},
};

/// Run an interactive session as configured
pub async fn run_client(config: ClientConfig) -> Result<Flow, ClientError> {
    let user_id = UserId::new(config.user_id.clone())?;

    if config.offline {
        tracing::info!("Running with an in-process store");
        let store = LocalAssociationStore::in_memory();
        let catalog = store.catalog();
        return cli::run_session(ConnectionController::new(store, user_id, catalog)).await;
    }

    let store = HttpAssociationStore::new(config.server_url.clone(), config.timeout())?;
    let catalog = match store.fetch_catalog().await {
        Ok(catalog) if !catalog.is_empty() => catalog,
        Ok(_) => Catalog::default(),
        Err(e) => {
            tracing::warn!("Could not load catalog from {}: {}", config.server_url, e);
            Catalog::default()
        }
    };
    if let Err(e) = store.register_user(&user_id).await {
        tracing::warn!("Could not register user '{}': {}", user_id, e);
    }

    cli::run_session(ConnectionController::new(store, user_id, Arc::new(catalog))).await
}
