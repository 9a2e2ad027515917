//! Employee (worker) profile attached to a user.

use serde::Serialize;

use crate::validation::ValidatedEmployee;
use crate::value_objects::UserId;

/// Worker profile keyed by the owning user's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeProfile {
    pub id: UserId,
    pub titles: String,
    pub description: Option<String>,
    pub ocupation: String,
    pub documentation: String,
}

impl EmployeeProfile {
    /// Attach validated profile data to a user id.
    pub fn new(id: UserId, data: ValidatedEmployee) -> Self {
        Self {
            id,
            titles: data.titles,
            description: data.description,
            ocupation: data.ocupation,
            documentation: data.documentation,
        }
    }
}
