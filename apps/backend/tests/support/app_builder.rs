use actix_http::Request;
use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use bookclub_backend::middleware::{OpenCors, RequestTrace, StructuredLogger, TraceSpan};
use bookclub_backend::routes::{self, fallback};
use bookclub_backend::state::app_state::AppState;

/// Type alias for route configuration functions
type RouteConfigFn = Box<dyn Fn(&mut web::ServiceConfig) + Send + Sync>;

/// Builder for creating test Actix service instances
pub struct TestAppBuilder {
    state: AppState,
    route_config: Option<RouteConfigFn>,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            route_config: None,
        }
    }

    /// Mount the real API under `/api`, as the binary does by default.
    pub fn with_prod_routes(self) -> Self {
        self.with_base_path("/api")
    }

    /// Mount the real API under another base path.
    pub fn with_base_path(mut self, base_path: &'static str) -> Self {
        self.route_config = Some(Box::new(move |cfg: &mut web::ServiceConfig| {
            routes::mount(base_path)(cfg)
        }) as RouteConfigFn);
        self
    }

    /// Configure the app with custom routes
    pub fn with_routes<F>(mut self, config_fn: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        self.route_config = Some(Box::new(config_fn) as RouteConfigFn);
        self
    }

    /// Build the test service with the production middleware stack.
    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<EitherBody<BoxBody>>, Error = Error> {
        let route_config = self.route_config;
        let data = web::Data::new(self.state);

        test::init_service(
            App::new()
                .wrap(OpenCors)
                .wrap(StructuredLogger)
                .wrap(TraceSpan)
                .wrap(RequestTrace)
                .app_data(data)
                .configure(move |cfg| {
                    if let Some(config_fn) = &route_config {
                        config_fn(cfg);
                    }
                })
                .default_service(web::to(fallback::not_found)),
        )
        .await
    }
}

/// Create a new test app builder with the given AppState
///
/// ```rust,ignore
/// let app = create_test_app(build_state().build()).with_prod_routes().build().await;
/// ```
pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
