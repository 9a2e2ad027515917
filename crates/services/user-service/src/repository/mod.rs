//! Repository layer for data access.
//!
//! Two implementations of each port: PostgreSQL through SeaORM and an
//! in-memory one. [`Repositories::connect`] picks one at startup.

pub mod entities;
mod employee_repository;
mod memory;
mod user_repository;

use std::sync::Arc;

use common::AppResult;

use crate::config::{RepositoryBackend, UserServiceConfig};
use crate::infra::Database;

pub use employee_repository::{EmployeeRepository, EmployeeStore};
pub use memory::{InMemoryEmployeeStore, InMemoryUserStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;

/// Repository handles shared by the use cases.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub employees: Arc<dyn EmployeeRepository>,
}

impl Repositories {
    /// Fresh in-memory repositories.
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserStore::new()),
            employees: Arc::new(InMemoryEmployeeStore::new()),
        }
    }

    /// Build the repositories selected by `config.backend`.
    pub async fn connect(config: &UserServiceConfig) -> AppResult<Self> {
        match config.backend {
            RepositoryBackend::Memory => {
                tracing::info!("Using in-memory repositories");
                Ok(Self::in_memory())
            }
            RepositoryBackend::Postgres => {
                let db = Database::connect(&config.database).await?;
                let conn = db.get_connection();
                Ok(Self {
                    users: Arc::new(UserStore::new(conn.clone())),
                    employees: Arc::new(EmployeeStore::new(conn)),
                })
            }
        }
    }
}
