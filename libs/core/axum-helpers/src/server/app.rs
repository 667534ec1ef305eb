use crate::auth::{StaticTokenAuth, static_token_auth_middleware};
use crate::errors::handlers::{not_found, panic_to_response};
use crate::http::request_logging;
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::io;
use tower_http::{catch_panic::CatchPanicLayer, normalize_path::NormalizePath};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::shutdown::shutdown_signal;

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates the application router: API routes under `/api`, the OpenAPI
/// document at `/api-docs/openapi.json`, Swagger UI at `/swagger-ui`, and a
/// JSON 404 fallback.
///
/// Trailing slashes are trimmed below `/api` only, so `/api/users/` routes
/// like `/api/users`. Swagger UI relies on its own `/swagger-ui/` redirect
/// and is left alone.
///
/// No middleware is attached here; merge any extra routers (health, ...) and
/// then call [`apply_request_filters`] once so every route shares one chain.
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
///
/// # Example
/// ```ignore
/// #[derive(OpenApi)]
/// #[openapi(paths(/* your paths */))]
/// struct ApiDoc;
///
/// let api_routes = Router::new().nest("/users", users_router);
/// let router = create_router::<ApiDoc>(api_routes);
/// ```
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest_service(
            "/api",
            NormalizePath::trim_trailing_slash(apis.fallback(not_found)),
        )
        .fallback(not_found)
}

/// Wraps every route (and the fallback) in the request filter chain.
///
/// From the outside in:
/// 1. [`request_logging`] sees every request and the final status, including
///    `401`s and recovered panics.
/// 2. [`CatchPanicLayer`] turns a handler panic into a generic `500` so one
///    bad request never takes the server down.
/// 3. [`static_token_auth_middleware`] rejects unauthenticated requests before
///    they reach a handler.
///
/// Must be called after all routes are merged: later routes would bypass it.
pub fn apply_request_filters(router: Router, auth: StaticTokenAuth) -> Router {
    router
        .layer(middleware::from_fn_with_state(
            auth,
            static_token_auth_middleware,
        ))
        .layer(CatchPanicLayer::custom(panic_to_response))
        .layer(middleware::from_fn(request_logging))
}
