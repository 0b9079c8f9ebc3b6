//! Test fixtures for HTTP integration tests.

use std::sync::Arc;

use paylink_server::{domain::AssociationRepository, ui};
use tokio::{net::TcpListener, task::JoinHandle};

/// A server running on an ephemeral port for the duration of a test
pub struct TestServer {
    addr: std::net::SocketAddr,
    repository: Arc<dyn AssociationRepository>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with an empty in-memory repository
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let state = ui::default_state();
        let repository = state.repository.clone();

        let handle = tokio::spawn(async move {
            if let Err(e) = ui::serve(listener, state).await {
                eprintln!("Test server error: {e}");
            }
        });

        Self {
            addr,
            repository,
            handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Direct access to the backing repository
    pub fn repository(&self) -> Arc<dyn AssociationRepository> {
        self.repository.clone()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
