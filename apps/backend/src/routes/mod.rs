use actix_web::http::Method;
use actix_web::web;

pub mod auth;
pub mod catalog;
pub mod fallback;
pub mod profile;

/// Every endpoint the demo serves, relative to the base path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRoute {
    Books,
    Clubs,
    Login,
    Register,
    Profile,
}

impl ApiRoute {
    pub const ALL: [ApiRoute; 5] = [
        ApiRoute::Books,
        ApiRoute::Clubs,
        ApiRoute::Login,
        ApiRoute::Register,
        ApiRoute::Profile,
    ];

    pub fn path(self) -> &'static str {
        match self {
            ApiRoute::Books => "/books",
            ApiRoute::Clubs => "/clubs",
            ApiRoute::Login => "/auth/login",
            ApiRoute::Register => "/auth/register",
            ApiRoute::Profile => "/user/profile",
        }
    }

    /// The single method each route answers; anything else is a 405.
    pub fn method(self) -> Method {
        match self {
            ApiRoute::Books | ApiRoute::Clubs | ApiRoute::Profile => Method::GET,
            ApiRoute::Login | ApiRoute::Register => Method::POST,
        }
    }
}

/// Register every [`ApiRoute`] relative to the enclosing scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    for route in ApiRoute::ALL {
        let allowed = web::route().method(route.method());
        let allowed = match route {
            ApiRoute::Books => allowed.to(catalog::books),
            ApiRoute::Clubs => allowed.to(catalog::clubs),
            ApiRoute::Login => allowed.to(auth::login),
            ApiRoute::Register => allowed.to(auth::register),
            ApiRoute::Profile => allowed.to(profile::profile),
        };

        cfg.service(
            web::resource(route.path())
                .route(allowed)
                .default_service(web::to(fallback::method_not_allowed)),
        );
    }
}

/// Mount the API under `base_path` (already normalised, e.g. `/api`).
///
/// Unknown paths are left to the app-level default service, see
/// [`fallback::not_found`].
pub fn mount(base_path: &str) -> impl FnOnce(&mut web::ServiceConfig) + '_ {
    move |cfg| {
        cfg.service(web::scope(base_path).configure(configure));
    }
}
