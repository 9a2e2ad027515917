//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{DomainResult, User, UserCreatedAt, UserEmail, UserId, UserName};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub role: String,
    pub is_verified: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Rebuild the domain aggregate. Stored values go back through the
    /// value-object constructors, so a corrupt row is reported, not loaded.
    pub fn into_domain(self) -> DomainResult<User> {
        Ok(User::from_persistence(
            UserId::new(self.id)?,
            UserName::new(self.name)?,
            self.last_name,
            UserEmail::new(self.email)?,
            self.password,
            self.role,
            self.is_verified,
            UserCreatedAt::new(self.created_at)?,
            self.updated_at,
        ))
    }
}

impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        ActiveModel {
            id: Set(user.id().to_string()),
            name: Set(user.name().to_string()),
            last_name: Set(user.last_name().to_string()),
            email: Set(user.email().to_string()),
            password: Set(user.password().to_string()),
            role: Set(user.role().to_string()),
            is_verified: Set(user.is_verified()),
            created_at: Set(user.created_at().value()),
            updated_at: Set(user.updated_at()),
        }
    }
}
