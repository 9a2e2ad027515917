//! User Service Library
//!
//! User aggregate persistence and use cases for the marketplace: repository
//! ports with PostgreSQL and in-memory implementations, schema migrations,
//! and the create/edit/delete/query use cases built on top of them.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::AppResult;
use domain::Argon2Hasher;

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::Repositories;
use crate::service::Services;

/// Wire repositories and use cases for the configured backend.
pub async fn build_services(config: &UserServiceConfig) -> AppResult<Services> {
    let repos = Repositories::connect(config).await?;
    Ok(Services::new(&repos, Arc::new(Argon2Hasher::new())))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(config: &UserServiceConfig, action: MigrateAction) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
