//! Use cases.
//!
//! Each use case holds the repository handles it needs and exposes one
//! `run` method. They are the only code that sees both the domain model
//! and the repository ports.

mod employee;
mod user_create;
mod user_delete;
mod user_edit;
mod user_queries;
mod user_register;

use std::sync::Arc;

use domain::PasswordHasher;

use crate::repository::Repositories;

pub use employee::{EmployeeList, EmployeeSave, EmployeeWatch};
pub use user_create::UserCreate;
pub use user_delete::UserDelete;
pub use user_edit::UserEdit;
pub use user_queries::{UserGetAll, UserGetOneByEmail, UserGetOneById};
pub use user_register::UserRegister;

/// Every use case, wired to one set of repositories.
pub struct Services {
    pub register: UserRegister,
    pub create: UserCreate,
    pub edit: UserEdit,
    pub delete: UserDelete,
    pub get_all: UserGetAll,
    pub get_by_id: UserGetOneById,
    pub get_by_email: UserGetOneByEmail,
    pub employee_save: EmployeeSave,
    pub employee_list: EmployeeList,
    pub employee_watch: EmployeeWatch,
}

impl Services {
    pub fn new(repos: &Repositories, hasher: Arc<dyn PasswordHasher>) -> Self {
        let users = &repos.users;
        let employees = &repos.employees;

        Self {
            register: UserRegister::new(UserCreate::new(users.clone()), hasher),
            create: UserCreate::new(users.clone()),
            edit: UserEdit::new(users.clone()),
            delete: UserDelete::new(users.clone()),
            get_all: UserGetAll::new(users.clone()),
            get_by_id: UserGetOneById::new(users.clone()),
            get_by_email: UserGetOneByEmail::new(users.clone()),
            employee_save: EmployeeSave::new(users.clone(), employees.clone()),
            employee_list: EmployeeList::new(employees.clone()),
            employee_watch: EmployeeWatch::new(employees.clone()),
        }
    }
}
