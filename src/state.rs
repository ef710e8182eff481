//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::DashboardService;
use crate::infrastructure::persistence::SqliteSalesRepository;

/// Handler-facing state: the dashboard service over the SQLite store.
///
/// Constructed once at startup; cloning is cheap (one `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: Arc<DashboardService<SqliteSalesRepository>>,
}

impl AppState {
    pub fn new(dashboard_service: Arc<DashboardService<SqliteSalesRepository>>) -> Self {
        Self { dashboard_service }
    }
}
