//! Terminal client for the BookClub demo endpoint.
//!
//! One process run is one page load: the endpoint is contacted once, the
//! session is restored from the local store, a single command is applied
//! and the resulting screen is printed.

pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod notifications;
pub mod offline;
pub mod onboarding;
pub mod preferences;
pub mod render;
pub mod search;
pub mod session;
pub mod storage;
pub mod toast;
pub mod validation;
pub mod view;

pub use app::{App, Submission};
pub use catalog::{Catalog, DataSource};
pub use config::ClientConfig;
pub use error::ClientError;
pub use storage::{FileStore, KeyValueStore, MemoryStore};

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
