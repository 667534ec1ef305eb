use super::token::StaticTokenAuth;
use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Static bearer-token authentication middleware
///
/// Exempt paths pass straight through. Every other request must carry
/// `Authorization: Bearer <token>` matching the configured token, otherwise the
/// chain is short-circuited with `401` and a plain-text reason. Accepted
/// requests are forwarded unchanged.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use axum_helpers::auth::{StaticTokenAuth, StaticTokenConfig, static_token_auth_middleware};
///
/// let auth = StaticTokenAuth::new(StaticTokenConfig::default());
///
/// let app = Router::new()
///     .route("/api/protected", get(protected_handler))
///     .layer(axum::middleware::from_fn_with_state(
///         auth,
///         static_token_auth_middleware,
///     ));
/// ```
pub async fn static_token_auth_middleware(
    State(auth): State<StaticTokenAuth>,
    request: Request,
    next: Next,
) -> Response {
    if auth.is_exempt(request.uri().path()) {
        return next.run(request).await;
    }

    if let Err(failure) = auth.verify(request.headers().get(header::AUTHORIZATION)) {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            reason = ?failure,
            "Authentication failed"
        );
        return (StatusCode::UNAUTHORIZED, failure.to_string()).into_response();
    }

    tracing::info!(
        "User authenticated for request: {} {}",
        request.method(),
        request.uri().path()
    );
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticTokenConfig;
    use axum::{Router, body::Body, http::Request as HttpRequest, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        let auth =
            StaticTokenAuth::new(StaticTokenConfig::new("valid-token-123", ["/health"]).unwrap());
        Router::new()
            .route("/health", get(|| async { "ok" }))
            .route("/protected", get(|| async { "secret" }))
            .layer(axum::middleware::from_fn_with_state(
                auth,
                static_token_auth_middleware,
            ))
    }

    async fn send(authorization: Option<&str>, uri: &str) -> (StatusCode, String) {
        let mut builder = HttpRequest::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header("authorization", value);
        }
        let response = app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_missing_header_is_rejected() {
        let (status, body) = send(None, "/protected").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "Authorization header is required");
    }

    #[tokio::test]
    async fn test_malformed_header_is_rejected() {
        let (status, body) = send(Some("Token abc"), "/protected").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Bearer {token}"));
    }

    #[tokio::test]
    async fn test_wrong_token_is_rejected() {
        let (status, body) = send(Some("Bearer wrong-token"), "/protected").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, "Invalid or expired token");
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let (status, body) = send(Some("Bearer valid-token-123"), "/protected").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "secret");
    }

    #[tokio::test]
    async fn test_exempt_path_needs_no_token() {
        let (status, body) = send(None, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_unknown_path_still_requires_token() {
        let (status, _) = send(None, "/missing").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
