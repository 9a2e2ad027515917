//! Create use case.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use common::AppResult;
use domain::{User, UserCreatedAt, UserEmail, UserId, UserName};

use crate::repository::UserRepository;

/// Build a `User` from primitives.
///
/// Value objects are built in a fixed order (id, name, email, creation date)
/// and the first failure is returned, before any I/O happens.
#[allow(clippy::too_many_arguments)]
pub(crate) fn build_user(
    id: String,
    name: String,
    last_name: String,
    email: String,
    password: String,
    role: String,
    is_verified: bool,
    created_at: DateTime<Utc>,
) -> AppResult<User> {
    let id = UserId::new(id)?;
    let name = UserName::new(name)?;
    let email = UserEmail::new(email)?;
    let created_at = UserCreatedAt::new(created_at)?;

    Ok(User::new(
        id,
        name,
        last_name,
        email,
        password,
        role,
        is_verified,
        created_at,
    ))
}

/// Validates and persists a new user.
pub struct UserCreate {
    repo: Arc<dyn UserRepository>,
}

impl UserCreate {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Build the aggregate and hand it to the repository.
    ///
    /// Uniqueness is not pre-checked; a store rejection is returned as is.
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
        created_at: DateTime<Utc>,
    ) -> AppResult<User> {
        let user = build_user(
            id,
            name,
            last_name,
            email,
            password,
            role,
            is_verified,
            created_at,
        )?;

        self.repo.create(&user).await?;
        tracing::info!(user_id = %user.id(), role = %user.role(), "User created");

        Ok(user)
    }
}
