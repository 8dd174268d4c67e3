//! Shared server state for the API layer

use crate::core::Config;
use crate::orders::OrdersManager;
use crate::services::{CatalogService, Recommender};
use std::sync::Arc;

/// Handles shared by every request handler
///
/// Presentation surfaces (the API routes) hold no business state of their
/// own; everything flows through the [`OrdersManager`] and the read-only
/// catalog.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub catalog: Arc<CatalogService>,
    pub manager: OrdersManager,
    /// Recommendation capability; None when no API key is configured
    pub recommender: Option<Arc<dyn Recommender>>,
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("restaurants", &self.catalog.len())
            .field("recommender", &self.recommender.is_some())
            .finish()
    }
}
