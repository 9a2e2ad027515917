//! Delete use case.

use std::sync::Arc;

use common::{AppError, AppResult};
use domain::UserId;

use crate::repository::UserRepository;

/// Deletes a user after checking that it exists.
pub struct UserDelete {
    repo: Arc<dyn UserRepository>,
}

impl UserDelete {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Look the user up, then delete it.
    ///
    /// # Errors
    /// `AppError::NotFound` when no user has this id; `delete` is not called.
    pub async fn run(&self, id: &str) -> AppResult<()> {
        let id = UserId::new(id)?;

        if self.repo.find_by_id(&id).await?.is_none() {
            tracing::warn!(user_id = %id, "Delete requested for unknown user");
            return Err(AppError::NotFound);
        }

        self.repo.delete(&id).await?;
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use domain::{User, UserCreatedAt, UserEmail, UserName};

    use crate::repository::MockUserRepository;

    fn stored(id: &UserId) -> User {
        User::new(
            id.clone(),
            UserName::new("Ana").unwrap(),
            String::new(),
            UserEmail::new("ana@example.com").unwrap(),
            "hash".into(),
            "user".into(),
            true,
            UserCreatedAt::new(Utc::now()).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_delete_existing() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(stored(id))));
        repo.expect_delete()
            .times(1)
            .withf(|id| id.as_str() == "u-1")
            .returning(|_| Ok(()));

        UserDelete::new(Arc::new(repo)).run("u-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_missing_never_deletes() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        repo.expect_delete().never();

        let err = UserDelete::new(Arc::new(repo)).run("ghost").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn test_blank_id_is_validation_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().never();
        repo.expect_delete().never();

        let err = UserDelete::new(Arc::new(repo)).run("").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_lookup_error_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .returning(|_| Err(AppError::persistence("connection reset")));
        repo.expect_delete().never();

        let err = UserDelete::new(Arc::new(repo)).run("u-1").await.unwrap_err();
        assert!(matches!(err, AppError::Persistence(_)));
    }
}
