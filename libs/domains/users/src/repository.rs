use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};

/// Repository trait for User persistence
///
/// Owns the user collection and the identifier counter. Implementations must
/// make every check-then-mutate sequence atomic with respect to other callers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Create a user with the next sequential ID.
    ///
    /// Fails with [`UserError::DuplicateEmail`] if the email is taken, ignoring case.
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Apply the present fields of `input`; `Ok(None)` when the ID is unknown.
    ///
    /// Changing the email to one held by a different user fails with
    /// [`UserError::DuplicateEmail`].
    async fn update(&self, id: i64, input: UpdateUser) -> UserResult<Option<User>>;

    /// Delete a user by ID; `false` when nothing was removed
    async fn delete(&self, id: i64) -> UserResult<bool>;
}

#[derive(Debug)]
struct UserStore {
    users: Vec<User>,
    next_id: i64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of UserRepository
///
/// One `RwLock` guards both the users and the counter, so the uniqueness check
/// and the insert (or update) happen under the same write guard.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<UserStore>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.clone())
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let mut store = self.store.write().await;

        if store.users.iter().any(|u| u.has_email(&input.email)) {
            return Err(UserError::DuplicateEmail(input.email));
        }

        let id = store.next_id;
        store.next_id = id
            .checked_add(1)
            .ok_or_else(|| UserError::Internal("user id space exhausted".to_string()))?;

        let user = User::new(id, input);
        store.users.push(user.clone());

        tracing::info!(user_id = user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn update(&self, id: i64, input: UpdateUser) -> UserResult<Option<User>> {
        let mut store = self.store.write().await;

        let Some(index) = store.users.iter().position(|u| u.id == id) else {
            return Ok(None);
        };

        if let Some(email) = input.email.as_deref() {
            let changes_email = !store.users[index].has_email(email);
            if changes_email && store.users.iter().any(|u| u.id != id && u.has_email(email)) {
                return Err(UserError::DuplicateEmail(email.to_string()));
            }
        }

        let user = &mut store.users[index];
        user.apply_update(input);

        tracing::info!(user_id = id, "Updated user");
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let mut store = self.store.write().await;

        match store.users.iter().position(|u| u.id == id) {
            Some(index) => {
                store.users.remove(index);
                tracing::info!(user_id = id, "Deleted user");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, email: &str) -> CreateUser {
        CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            department: "Engineering".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let repo = InMemoryUserRepository::new();

        let created = repo.create(input("Ann", "ann@x.com")).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.email, "ann@x.com");
        assert!(created.updated_at.is_none());

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let repo = InMemoryUserRepository::new();

        let ann = repo.create(input("Ann", "ann@x.com")).await.unwrap();
        assert!(repo.delete(ann.id).await.unwrap());

        let bob = repo.create(input("Bob", "bob@x.com")).await.unwrap();
        assert_eq!(ann.id, 1);
        assert_eq!(bob.id, 2);
    }

    #[tokio::test]
    async fn test_duplicate_email_ignores_case() {
        let repo = InMemoryUserRepository::new();
        repo.create(input("Ann", "ann@x.com")).await.unwrap();

        let result = repo.create(input("Other Ann", "ANN@X.COM")).await;
        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_create_does_not_consume_id() {
        let repo = InMemoryUserRepository::new();
        repo.create(input("Ann", "ann@x.com")).await.unwrap();
        repo.create(input("Ann", "ann@x.com")).await.unwrap_err();

        let bob = repo.create(input("Bob", "bob@x.com")).await.unwrap();
        assert_eq!(bob.id, 2);
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = InMemoryUserRepository::new();
        for (name, email) in [("Cy", "c@x.com"), ("Ann", "a@x.com"), ("Bob", "b@x.com")] {
            repo.create(input(name, email)).await.unwrap();
        }

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["Cy", "Ann", "Bob"]);
    }

    #[tokio::test]
    async fn test_partial_update() {
        let repo = InMemoryUserRepository::new();
        let ann = repo.create(input("Ann", "ann@x.com")).await.unwrap();

        let updated = repo
            .update(
                ann.id,
                UpdateUser {
                    department: Some("Ops".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Ann");
        assert_eq!(updated.email, "ann@x.com");
        assert_eq!(updated.department, "Ops");
        assert_eq!(updated.created_at, ann.created_at);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_update_rejects_email_of_other_user() {
        let repo = InMemoryUserRepository::new();
        repo.create(input("Ann", "ann@x.com")).await.unwrap();
        let bob = repo.create(input("Bob", "bob@x.com")).await.unwrap();

        let result = repo
            .update(
                bob.id,
                UpdateUser {
                    email: Some("Ann@X.com".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(UserError::DuplicateEmail(_))));

        let unchanged = repo.get_by_id(bob.id).await.unwrap().unwrap();
        assert_eq!(unchanged.email, "bob@x.com");
        assert!(unchanged.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_update_allows_recasing_own_email() {
        let repo = InMemoryUserRepository::new();
        let ann = repo.create(input("Ann", "ann@x.com")).await.unwrap();

        let updated = repo
            .update(
                ann.id,
                UpdateUser {
                    email: Some("ANN@x.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.email, "ANN@x.com");
    }

    #[tokio::test]
    async fn test_missing_id_has_no_side_effects() {
        let repo = InMemoryUserRepository::new();
        repo.create(input("Ann", "ann@x.com")).await.unwrap();

        assert_eq!(repo.get_by_id(99).await.unwrap(), None);
        assert!(!repo.delete(99).await.unwrap());
        assert_eq!(
            repo.update(99, UpdateUser::default()).await.unwrap(),
            None
        );
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_keep_emails_unique() {
        let repo = InMemoryUserRepository::new();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    let email = if i % 2 == 0 { "same@x.com" } else { "SAME@X.COM" };
                    repo.create(input("Racer", email)).await
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
