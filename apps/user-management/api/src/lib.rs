//! User management HTTP service.
//!
//! Wires the users domain into the shared server helpers:
//!
//! ```text
//! request_logging → catch panic → static token auth → router
//!                                                      ├─ /api/usermanagement  (users domain)
//!                                                      ├─ /health
//!                                                      ├─ /swagger-ui, /api-docs/openapi.json
//!                                                      └─ fallback 404
//! ```

use axum::Router;
use axum_helpers::{
    StaticTokenAuth,
    server::{apply_request_filters, create_router, health_router},
};
use domain_users::{InMemoryUserRepository, UserService, handlers};

pub mod config;
pub mod openapi;

use config::Config;

/// Mount point of the users domain below `/api`.
pub const USERS_PATH: &str = "/usermanagement";

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
pub fn routes() -> Router {
    let service = UserService::new(InMemoryUserRepository::new());
    Router::new().nest(USERS_PATH, handlers::router(service))
}

/// Build the complete application: API routes, docs, health check and the
/// request filter chain wrapped around all of them.
pub fn app(config: &Config) -> Router {
    let router = create_router::<openapi::ApiDoc>(routes()).merge(health_router(config.app));
    apply_request_filters(router, StaticTokenAuth::new(config.auth.clone()))
}
