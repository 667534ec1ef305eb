//! # Axum Helpers
//!
//! Shared building blocks for the Axum services in this workspace.
//!
//! ## Modules
//!
//! - **[`auth`]**: Static bearer-token check with configurable exempt paths
//! - **[`server`]**: Router assembly, request filter chain, health check, graceful shutdown
//! - **[`http`]**: Request/response logging middleware
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (integer id path, validated JSON)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::auth::{StaticTokenAuth, StaticTokenConfig};
//! use axum_helpers::server::{apply_request_filters, create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes);
//!     let router = apply_request_filters(router, StaticTokenAuth::new(StaticTokenConfig::default()));
//!
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{AuthFailure, StaticTokenAuth, StaticTokenConfig, static_token_auth_middleware};

// Re-export server types
pub use server::{
    HealthResponse, apply_request_filters, create_app, create_router, health_router,
    shutdown_signal,
};

// Re-export HTTP middleware
pub use http::request_logging;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{IdPath, ValidatedJson};
