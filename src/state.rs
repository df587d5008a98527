//! Shared application state for all routes.

use crate::resource::ResourceRegistry;
use sqlx::MySqlPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: MySqlPool,
    pub registry: Arc<ResourceRegistry>,
}

impl AppState {
    pub fn new(pool: MySqlPool) -> Self {
        AppState {
            pool,
            registry: Arc::new(ResourceRegistry::builtin()),
        }
    }
}
