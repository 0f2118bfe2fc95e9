pub mod server;

pub use server::{normalize_base_path, ServerConfig};
