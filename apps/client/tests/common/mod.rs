#![allow(dead_code)]

use std::net::{SocketAddr, TcpListener};

use actix_web::{web, App, HttpResponse, HttpServer};
use bookclub_backend::infra::state::build_state;
use bookclub_backend::middleware::{OpenCors, RequestTrace, StructuredLogger, TraceSpan};
use bookclub_backend::routes::{self, fallback};
use bookclub_client::{App as ClientApp, ClientConfig, FileStore};
use tempfile::TempDir;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Nothing listens on port 1.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:1/api";

/// Serve an app factory on an ephemeral local port.
macro_rules! serve {
    ($factory:expr) => {{
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let addr: SocketAddr = listener.local_addr().expect("listener address");
        let server = HttpServer::new($factory)
            .workers(1)
            .listen(listener)
            .expect("listen on ephemeral port")
            .run();
        actix_web::rt::spawn(server);
        addr
    }};
}

/// Start the real endpoint under `/api` and return its base URL.
pub fn spawn_backend() -> String {
    let data = web::Data::new(build_state().build());
    let addr = serve!(move || {
        App::new()
            .wrap(OpenCors)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::mount("/api"))
            .default_service(web::to(fallback::not_found))
    });
    format!("http://{addr}/api")
}

/// An endpoint that answers every request with 503.
pub fn spawn_unavailable_backend() -> String {
    let addr = serve!(|| {
        App::new().default_service(web::to(|| async {
            HttpResponse::ServiceUnavailable().json(serde_json::json!({"error": "Maintenance"}))
        }))
    });
    format!("http://{addr}/api")
}

/// An endpoint that answers every request with 200 and an HTML page.
pub fn spawn_html_backend() -> String {
    let addr = serve!(|| {
        App::new().default_service(web::to(|| async {
            HttpResponse::Ok()
                .content_type("text/html")
                .body("<html><body>It works!</body></html>")
        }))
    });
    format!("http://{addr}/api")
}

/// An endpoint that refuses every submission with 400 and `message`.
pub fn spawn_rejecting_backend(message: &'static str) -> String {
    let addr = serve!(move || {
        App::new().default_service(web::to(move || async move {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message }))
        }))
    });
    format!("http://{addr}/api")
}

pub fn config(api_url: &str, state_dir: &TempDir) -> ClientConfig {
    ClientConfig {
        api_url: api_url.to_string(),
        state_dir: state_dir.path().to_path_buf(),
        prefers_dark: false,
    }
}

/// One page load against `api_url` with the store in `state_dir`.
pub async fn page_load(api_url: &str, state_dir: &TempDir) -> ClientApp<FileStore> {
    let store = FileStore::open(state_dir.path()).expect("open store");
    ClientApp::start(&config(api_url, state_dir), store)
        .await
        .expect("start client")
}
