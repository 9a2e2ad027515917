//! Registration use case: raw form in, stored user out.

use std::sync::Arc;

use chrono::Utc;

use common::AppResult;
use domain::{validate_user_data, PasswordHasher, RegistrationInput, User, UserId};

use super::UserCreate;

/// Validates a registration form, hashes the password and creates the user.
pub struct UserRegister {
    create: UserCreate,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserRegister {
    pub fn new(create: UserCreate, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { create, hasher }
    }

    /// New users start unverified, with a fresh random id.
    pub async fn run(&self, input: &RegistrationInput) -> AppResult<User> {
        let record = validate_user_data(input)?;
        tracing::debug!(email = %record.email, role = %record.role, "Registration validated");

        let password_hash = self.hasher.hash(&record.password)?;

        self.create
            .run(
                UserId::generate().into_inner(),
                record.first_name,
                record.last_name,
                record.email,
                password_hash,
                record.role,
                false,
                Utc::now(),
            )
            .await
    }
}
