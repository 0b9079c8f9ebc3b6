//! Test fixtures for controller integration tests.

use std::{net::SocketAddr, time::Duration};

use paylink_client::store::HttpAssociationStore;
use paylink_server::ui;
use tokio::{net::TcpListener, task::JoinHandle};

/// A paylink server running on an ephemeral port for the duration of a test
pub struct TestServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with an empty in-memory repository
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let handle = tokio::spawn(async move {
            if let Err(e) = ui::serve(listener, ui::default_state()).await {
                eprintln!("Test server error: {e}");
            }
        });

        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// HTTP store pointed at this server
    pub fn store(&self) -> HttpAssociationStore {
        HttpAssociationStore::new(self.base_url(), Duration::from_secs(5))
            .expect("Failed to build store client")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
