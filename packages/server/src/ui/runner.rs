//! Router construction and server startup.

use std::{collections::HashMap, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tokio::{net::TcpListener, sync::Mutex};
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    domain::Catalog,
    error::ServerError,
    infrastructure::repository::InMemoryAssociationRepository,
    ui::{handler, signal::shutdown_signal, state::AppState},
};

/// Build the HTTP router over `state`
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handler::health_check))
        .route("/api/payment-methods", get(handler::list_payment_methods))
        .route(
            "/api/payment",
            get(handler::get_association)
                .post(handler::connect_payment_method)
                .delete(handler::disconnect_payment_method),
        )
        .route("/api/users", post(handler::register_user))
        .route("/api/users/{user_id}", get(handler::get_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Application state backed by an empty in-memory repository and the default catalog
pub fn default_state() -> Arc<AppState> {
    let users = Arc::new(Mutex::new(HashMap::new()));
    let repository = Arc::new(InMemoryAssociationRepository::new(users));
    Arc::new(AppState::new(repository, Arc::new(Catalog::default())))
}

/// Serve `state` on an already bound listener until a shutdown signal arrives
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<(), ServerError> {
    let addr = listener.local_addr()?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Bind the configured address and run the server
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    serve(listener, default_state()).await
}
