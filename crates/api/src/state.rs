use std::sync::Arc;

use roomreel_core::reward::RewardDrawer;
use roomreel_store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Storage and
/// randomness are injected capabilities: tests swap in a fresh
/// `MemoryStore` and a seeded drawer.
#[derive(Clone)]
pub struct AppState {
    /// Entity storage backend.
    pub store: Arc<dyn Store>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Reward catalog + random source for submission-time draws.
    pub drawer: Arc<RewardDrawer>,
}
