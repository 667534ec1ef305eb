use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

/// Service layer for User business logic
///
/// Validates input before any repository call and turns "absent" repository
/// results into [`UserError::NotFound`].
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all users
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Get a user by ID
    #[instrument(skip(self), fields(user_id = id))]
    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Create a new user with validation
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Update a user
    #[instrument(skip(self, input), fields(user_id = id))]
    pub async fn update_user(&self, id: i64, input: UpdateUser) -> UserResult<User> {
        input.validate()?;
        self.repository
            .update(id, input)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Delete a user
    #[instrument(skip(self), fields(user_id = id))]
    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        if !self.repository.delete(id).await? {
            return Err(UserError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_invalid_create_never_reaches_repository() {
        // No expectations: any repository call would panic.
        let service = UserService::new(MockUserRepository::new());

        let result = service
            .create_user(CreateUser {
                name: "A".to_string(),
                email: "bad".to_string(),
                department: String::new(),
            })
            .await;

        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_invalid_update_never_reaches_repository() {
        let service = UserService::new(MockUserRepository::new());

        let result = service
            .update_user(
                1,
                UpdateUser {
                    name: Some("A".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(7))
            .returning(|_| Ok(None));

        let service = UserService::new(mock_repo);
        let result = service.get_user(7).await;

        assert!(matches!(result, Err(UserError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_update().returning(|_, _| Ok(None));

        let service = UserService::new(mock_repo);
        let result = service.update_user(3, UpdateUser::default()).await;

        assert!(matches!(result, Err(UserError::NotFound(3))));
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(5))
            .returning(|_| Ok(false));

        let service = UserService::new(mock_repo);
        let result = service.delete_user(5).await;

        assert!(matches!(result, Err(UserError::NotFound(5))));
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Err(UserError::Internal("store unavailable".to_string())));

        let service = UserService::new(mock_repo);
        let result = service.list_users().await;

        assert!(matches!(result, Err(UserError::Internal(_))));
    }
}
