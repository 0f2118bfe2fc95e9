use crate::domain::DemoCatalog;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    catalog: DemoCatalog,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            catalog: DemoCatalog::default(),
        }
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub fn with_catalog(mut self, catalog: DemoCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn build(self) -> AppState {
        AppState::new(self.security_config, self.catalog)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
