//! Authentication module.
//!
//! This module provides:
//! - A static bearer-token verifier ([`StaticTokenAuth`])
//! - The request filter that enforces it ([`static_token_auth_middleware`])
//!
//! The token is a single shared secret from configuration. It is a placeholder
//! trust check, not an identity system: there is no issuance, expiry or
//! per-caller identity.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{StaticTokenAuth, StaticTokenConfig, static_token_auth_middleware};
//! use core_config::FromEnv;
//!
//! let auth = StaticTokenAuth::new(StaticTokenConfig::from_env()?);
//!
//! let protected = Router::new()
//!     .route("/api/protected", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(auth, static_token_auth_middleware));
//! ```

pub mod config;
pub mod middleware;
pub mod token;

pub use config::StaticTokenConfig;
pub use middleware::static_token_auth_middleware;
pub use token::{AuthFailure, StaticTokenAuth};
