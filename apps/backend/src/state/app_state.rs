use super::security_config::SecurityConfig;
use crate::domain::catalog::DemoCatalog;

/// Shared, read-only application state. Nothing here changes after startup;
/// every request computes its answer from these constants plus the clock.
#[derive(Debug, Clone)]
pub struct AppState {
    pub security: SecurityConfig,
    pub catalog: DemoCatalog,
}

impl AppState {
    pub fn new(security: SecurityConfig, catalog: DemoCatalog) -> Self {
        Self { security, catalog }
    }
}
