//! HTTP middleware module.
//!
//! This module provides HTTP-level middleware for:
//! - Request/response logging
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::request_logging;
//!
//! let app = Router::new()
//!     .route("/", get(handler))
//!     .layer(axum::middleware::from_fn(request_logging));
//! ```

pub mod logging;

pub use logging::request_logging;
