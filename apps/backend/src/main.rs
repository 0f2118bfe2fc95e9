use actix_web::{web, App, HttpServer};
use bookclub_backend::config::ServerConfig;
use bookclub_backend::infra::state::build_state;
use bookclub_backend::middleware::{OpenCors, RequestTrace, StructuredLogger, TraceSpan};
use bookclub_backend::routes::{self, fallback};
use bookclub_backend::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing(telemetry::LogFormat::from_env());

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = build_state().with_security(config.security()).build();
    let data = web::Data::new(app_state);
    let base_path = config.api_base_path.clone();

    info!(
        host = %config.host,
        port = config.port,
        base_path = %base_path,
        "starting BookClub demo endpoint"
    );

    HttpServer::new(move || {
        App::new()
            .wrap(OpenCors)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::mount(&base_path))
            .default_service(web::to(fallback::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
