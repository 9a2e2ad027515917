//! Employee profile database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{DomainResult, EmployeeProfile, UserId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// Same id as the owning row in `users`
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub titles: String,
    pub description: Option<String>,
    pub ocupation: String,
    pub documentation: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> DomainResult<EmployeeProfile> {
        Ok(EmployeeProfile {
            id: UserId::new(self.id)?,
            titles: self.titles,
            description: self.description,
            ocupation: self.ocupation,
            documentation: self.documentation,
        })
    }
}

impl From<&EmployeeProfile> for ActiveModel {
    fn from(profile: &EmployeeProfile) -> Self {
        ActiveModel {
            id: Set(profile.id.to_string()),
            titles: Set(profile.titles.clone()),
            description: Set(profile.description.clone()),
            ocupation: Set(profile.ocupation.clone()),
            documentation: Set(profile.documentation.clone()),
        }
    }
}
