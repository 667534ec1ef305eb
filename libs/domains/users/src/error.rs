use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User with ID {0} not found")]
    NotFound(i64),

    /// Carries the rejected email; it is logged, not echoed to the caller.
    #[error("User with this email already exists")]
    DuplicateEmail(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AppError::NotFound(format!("User with ID {} not found", id)),
            UserError::DuplicateEmail(email) => {
                tracing::info!(%email, "Rejected duplicate email");
                AppError::Conflict("User with this email already exists".to_string())
            }
            UserError::Validation(errors) => AppError::ValidationError(errors),
            UserError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use tracing_test::traced_test;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (UserError::NotFound(3), StatusCode::NOT_FOUND),
            (
                UserError::DuplicateEmail("a@x.com".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                UserError::Validation(ValidationErrors::new()),
                StatusCode::BAD_REQUEST,
            ),
            (
                UserError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(UserError::NotFound(42).to_string(), "User with ID 42 not found");
        assert_eq!(
            UserError::DuplicateEmail("a@x.com".into()).to_string(),
            "User with this email already exists"
        );
    }

    #[traced_test]
    #[test]
    fn test_duplicate_email_is_logged_not_returned() {
        let app_error: AppError = UserError::DuplicateEmail("ann@x.com".into()).into();

        assert!(logs_contain("Rejected duplicate email"));
        assert!(logs_contain("ann@x.com"));
        assert!(!app_error.to_string().contains("ann@x.com"));
    }
}
