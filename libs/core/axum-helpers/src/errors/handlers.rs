use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::any::Any;

use super::{ErrorCode, ErrorResponse};

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new(
        ErrorCode::NotFound,
        "The requested resource was not found",
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}

/// Turns a handler panic into a generic `500`.
///
/// The panic payload is logged; the caller only sees the standard internal
/// error body. Plug into `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_to_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(
        error_code = ErrorCode::InternalError.code(),
        panic = detail,
        "Request handler panicked"
    );

    let body = Json(ErrorResponse::new(
        ErrorCode::InternalError,
        ErrorCode::InternalError.default_message(),
    ));

    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_status() {
        assert_eq!(not_found().await.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_panic_payloads_map_to_500() {
        let from_str = panic_to_response(Box::new("boom"));
        let from_string = panic_to_response(Box::new(String::from("boom")));
        let from_other = panic_to_response(Box::new(42_u8));

        for response in [from_str, from_string, from_other] {
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
