//! Employee profile use cases.

use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{validate_employee_data, EmployeeInput, EmployeeProfile, UserId};

use crate::repository::{EmployeeRepository, UserRepository};

/// Validates and stores the worker profile of an existing user.
pub struct EmployeeSave {
    users: Arc<dyn UserRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl EmployeeSave {
    pub fn new(users: Arc<dyn UserRepository>, employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { users, employees }
    }

    /// Saving again replaces the previous profile.
    ///
    /// # Errors
    /// Validation errors first, then `AppError::NotFound` if the user is unknown.
    pub async fn run(&self, id: &str, input: &EmployeeInput) -> AppResult<EmployeeProfile> {
        let id = UserId::new(id)?;
        let data = validate_employee_data(input)?;

        if self.users.find_by_id(&id).await?.is_none() {
            return Err(AppError::NotFound);
        }

        let profile = EmployeeProfile::new(id, data);
        self.employees.save(&profile).await?;
        tracing::info!(user_id = %profile.id, ocupation = %profile.ocupation, "Employee profile saved");

        Ok(profile)
    }
}

/// Lists every worker profile.
pub struct EmployeeList {
    employees: Arc<dyn EmployeeRepository>,
}

impl EmployeeList {
    pub fn new(employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees }
    }

    pub async fn run(&self) -> AppResult<Vec<EmployeeProfile>> {
        self.employees.find_all().await
    }
}

/// Fetches one worker profile.
pub struct EmployeeWatch {
    employees: Arc<dyn EmployeeRepository>,
}

impl EmployeeWatch {
    pub fn new(employees: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees }
    }

    pub async fn run(&self, id: &str) -> AppResult<EmployeeProfile> {
        let id = UserId::new(id)?;
        self.employees.find_by_id(&id).await?.ok_or_not_found()
    }
}
