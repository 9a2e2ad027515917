//! Employee profile repository port and its PostgreSQL implementation.

use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, QueryOrder, SqlErr};

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity, Model};
use common::{AppError, AppResult};
use domain::{EmployeeProfile, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee profile repository. One profile per user id.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert the profile, or replace the one already stored for its id
    async fn save(&self, profile: &EmployeeProfile) -> AppResult<()>;

    /// Find the profile of a user
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<EmployeeProfile>>;

    /// List all profiles
    async fn find_all(&self) -> AppResult<Vec<EmployeeProfile>>;
}

/// Concrete implementation of EmployeeRepository backed by PostgreSQL
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn load(model: Model) -> AppResult<EmployeeProfile> {
    let id = model.id.clone();
    model
        .into_domain()
        .map_err(|e| AppError::internal(format!("Corrupt employee row {}: {}", id, e)))
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn save(&self, profile: &EmployeeProfile) -> AppResult<()> {
        let upsert = OnConflict::column(employee::Column::Id)
            .update_columns([
                employee::Column::Titles,
                employee::Column::Description,
                employee::Column::Ocupation,
                employee::Column::Documentation,
            ])
            .to_owned();

        let result = EmployeeEntity::insert(ActiveModel::from(profile))
            .on_conflict(upsert)
            .exec(&self.db)
            .await;

        match result {
            Ok(_) => Ok(()),
            // The owning user row is gone
            Err(e) if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) => {
                Err(AppError::NotFound)
            }
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<EmployeeProfile>> {
        EmployeeEntity::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .map(load)
            .transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<EmployeeProfile>> {
        let models = EmployeeEntity::find()
            .order_by_asc(employee::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(load).collect()
    }
}
