//! In-memory repositories.
//!
//! Same contracts as the PostgreSQL stores, including the unique email
//! index, kept in process memory. Used for local runs and tests.
//! Emails compare without regard to ASCII case, like `LOWER(email)` does in SQL.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{EmployeeRepository, UserRepository};
use common::{AppError, AppResult};
use domain::{EmployeeProfile, User, UserEmail, UserId};

/// In-memory user store keyed by id.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn same_email(a: &UserEmail, b: &UserEmail) -> bool {
    a.as_str().eq_ignore_ascii_case(b.as_str())
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().await;

        if users.contains_key(user.id()) {
            return Err(AppError::conflict("User"));
        }
        if users.values().any(|u| same_email(u.email(), user.email())) {
            return Err(AppError::conflict("Email"));
        }

        users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_email(&self, email: &UserEmail) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| same_email(u.email(), email))
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by_key(|u| *u.created_at());
        Ok(users)
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.write().await;

        if !users.contains_key(user.id()) {
            return Err(AppError::NotFound);
        }
        if users
            .values()
            .any(|u| u.id() != user.id() && same_email(u.email(), user.email()))
        {
            return Err(AppError::conflict("Email"));
        }

        users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn delete(&self, id: &UserId) -> AppResult<()> {
        self.users
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(AppError::NotFound)
    }
}

/// In-memory employee profile store keyed by user id.
#[derive(Default)]
pub struct InMemoryEmployeeStore {
    profiles: RwLock<HashMap<UserId, EmployeeProfile>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeStore {
    async fn save(&self, profile: &EmployeeProfile) -> AppResult<()> {
        self.profiles
            .write()
            .await
            .insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<EmployeeProfile>> {
        Ok(self.profiles.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<EmployeeProfile>> {
        let mut profiles: Vec<EmployeeProfile> =
            self.profiles.read().await.values().cloned().collect();
        profiles.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        Ok(profiles)
    }
}
