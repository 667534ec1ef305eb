use super::config::StaticTokenConfig;
use axum::http::HeaderValue;
use std::sync::Arc;
use thiserror::Error;

const BEARER_PREFIX: &str = "Bearer ";

/// Why a request was refused. The `Display` text is the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error("Authorization header is required")]
    MissingHeader,

    #[error("Invalid authorization format. Use 'Bearer {{token}}'")]
    InvalidFormat,

    #[error("Invalid or expired token")]
    InvalidToken,
}

/// Verifies `Authorization: Bearer <token>` against one configured token.
///
/// Cheap to clone; the config is shared behind an `Arc`.
#[derive(Clone, Debug)]
pub struct StaticTokenAuth {
    config: Arc<StaticTokenConfig>,
}

impl StaticTokenAuth {
    pub fn new(config: StaticTokenConfig) -> Self {
        tracing::info!(
            exempt_paths = ?config.exempt_paths,
            "Static token auth initialized"
        );
        Self {
            config: Arc::new(config),
        }
    }

    /// Whether `path` is served without authentication.
    ///
    /// Matches whole segments, ignoring ASCII case: `/health` exempts `/health`
    /// and `/health/live` but not `/healthz`.
    pub fn is_exempt(&self, path: &str) -> bool {
        self.config.exempt_paths.iter().any(|prefix| {
            path.len() >= prefix.len()
                && path.is_char_boundary(prefix.len())
                && path[..prefix.len()].eq_ignore_ascii_case(prefix)
                && matches!(path.as_bytes().get(prefix.len()), None | Some(b'/'))
        })
    }

    /// Check the raw `Authorization` header value.
    pub fn verify(&self, header: Option<&HeaderValue>) -> Result<(), AuthFailure> {
        let header = header.ok_or(AuthFailure::MissingHeader)?;

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .ok_or(AuthFailure::InvalidFormat)?
            .trim();

        if token.is_empty() || token != self.config.token {
            return Err(AuthFailure::InvalidToken);
        }

        Ok(())
    }
}
