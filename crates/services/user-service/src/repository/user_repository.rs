//! User repository port and its PostgreSQL implementation.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity, Model};
use common::{AppError, AppResult};
use domain::{User, UserEmail, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups return `Ok(None)` when nothing matches; absence is not an error.
/// `create` does not pre-check anything: uniqueness is the store's job and a
/// rejected write comes back as an error.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    async fn create(&self, user: &User) -> AppResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    /// Find user by email address, ignoring ASCII case
    async fn find_by_email(&self, email: &UserEmail) -> AppResult<Option<User>>;

    /// List all users, oldest first
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Overwrite an existing user
    async fn update(&self, user: &User) -> AppResult<()>;

    /// Delete user by ID
    async fn delete(&self, id: &UserId) -> AppResult<()>;
}

/// Concrete implementation of UserRepository backed by PostgreSQL
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Rebuild a domain user from a row.
fn load(model: Model) -> AppResult<User> {
    let id = model.id.clone();
    model
        .into_domain()
        .map_err(|e| AppError::internal(format!("Corrupt user row {}: {}", id, e)))
}

/// Map a failed write, turning unique-index rejections into conflicts.
fn write_error(err: DbErr, entity: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) if detail.contains("email") => {
            AppError::conflict("Email")
        }
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(entity),
        _ => AppError::from(err),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, user: &User) -> AppResult<()> {
        ActiveModel::from(user)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "User"))?;
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        UserEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(load)
            .transpose()
    }

    async fn find_by_email(&self, email: &UserEmail) -> AppResult<Option<User>> {
        UserEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(user::Column::Email)))
                    .eq(email.as_str().to_ascii_lowercase()),
            )
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(load)
            .transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(load).collect()
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        match ActiveModel::from(user).update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(AppError::NotFound),
            Err(e) => Err(write_error(e, "User")),
        }
    }

    async fn delete(&self, id: &UserId) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
