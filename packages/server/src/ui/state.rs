//! Server state shared by the HTTP handlers.

use std::sync::Arc;

use crate::domain::{AssociationRepository, Catalog};

/// Shared application state
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub repository: Arc<dyn AssociationRepository>,
    /// Payment methods offered to users
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(repository: Arc<dyn AssociationRepository>, catalog: Arc<Catalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }
}
