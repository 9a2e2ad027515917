//! Edit use case.

use std::sync::Arc;

use common::{AppError, AppResult};
use domain::{User, UserEmail, UserId, UserName};

use crate::repository::UserRepository;

/// Replaces the stored state of an existing user.
pub struct UserEdit {
    repo: Arc<dyn UserRepository>,
}

impl UserEdit {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Rebuild the aggregate from the given fields and store it.
    ///
    /// The creation date is taken from the stored user; rebuilding stamps a
    /// new `updated_at`. Validation happens before the existence check, so
    /// bad input never costs a round trip.
    #[allow(clippy::too_many_arguments)]
    pub async fn run(
        &self,
        id: String,
        name: String,
        last_name: String,
        email: String,
        password: String,
        role: String,
        is_verified: bool,
    ) -> AppResult<User> {
        let id = UserId::new(id)?;
        let name = UserName::new(name)?;
        let email = UserEmail::new(email)?;

        let stored = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or(AppError::NotFound)?;

        let user = User::new(
            id,
            name,
            last_name,
            email,
            password,
            role,
            is_verified,
            *stored.created_at(),
        );

        self.repo.update(&user).await?;
        tracing::info!(user_id = %user.id(), "User updated");

        Ok(user)
    }
}
