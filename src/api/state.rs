//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::config::{Config, DashboardConfig, ServerConfig};
use crate::data::Dataset;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The dashboard tables, built once at startup and never mutated
    pub dataset: Arc<Dataset>,
    /// Rendering configuration
    pub dashboard: Arc<DashboardConfig>,
    /// Server configuration
    pub server: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(dataset: Dataset, config: &Config) -> Self {
        Self {
            dataset: Arc::new(dataset),
            dashboard: Arc::new(config.dashboard.clone()),
            server: Arc::new(config.server.clone()),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
