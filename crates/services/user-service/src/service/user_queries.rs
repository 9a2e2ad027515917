//! Read-side use cases.

use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{User, UserEmail, UserId};

use crate::repository::UserRepository;

/// Lists every user.
pub struct UserGetAll {
    repo: Arc<dyn UserRepository>,
}

impl UserGetAll {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn run(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }
}

/// Fetches one user by id.
pub struct UserGetOneById {
    repo: Arc<dyn UserRepository>,
}

impl UserGetOneById {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// # Errors
    /// `AppError::NotFound` when no user has this id.
    pub async fn run(&self, id: &str) -> AppResult<User> {
        let id = UserId::new(id)?;
        self.repo.find_by_id(&id).await?.ok_or_not_found()
    }
}

/// Fetches one user by email address, ignoring case and surrounding spaces.
pub struct UserGetOneByEmail {
    repo: Arc<dyn UserRepository>,
}

impl UserGetOneByEmail {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// # Errors
    /// `AppError::NotFound` when no user has this email.
    pub async fn run(&self, email: &str) -> AppResult<User> {
        let email = UserEmail::new(email.trim().to_lowercase())?;
        self.repo.find_by_email(&email).await?.ok_or_not_found()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;

    use crate::repository::MockUserRepository;

    #[tokio::test]
    async fn test_get_one_by_id_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let result = UserGetOneById::new(Arc::new(repo)).run("u-404").await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_by_email_normalizes() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .withf(|email| email.as_str() == "ana@example.com")
            .returning(|_| Ok(None));

        let result = UserGetOneByEmail::new(Arc::new(repo))
            .run("  ANA@Example.com ")
            .await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_all_passes_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all().times(1).returning(|| Ok(Vec::new()));

        let users = UserGetAll::new(Arc::new(repo)).run().await.unwrap();
        assert!(users.is_empty());
    }
}
