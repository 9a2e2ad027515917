//! Domain layer - User aggregate, value objects and field validation.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Raw input flows through the validators, then into value objects, then into
//! the [`User`] aggregate.

pub mod constants;
pub mod employee;
pub mod error;
pub mod password;
pub mod user;
pub mod validation;
pub mod value_objects;

pub use constants::*;
pub use employee::EmployeeProfile;
pub use error::{DomainError, DomainResult};
pub use password::{Argon2Hasher, PasswordHasher};
pub use user::{User, UserResponse};
pub use validation::{
    validate_employee_data, validate_user_data, EmployeeInput, RegistrationInput,
    ValidatedEmployee, ValidatedRegistration,
};
pub use value_objects::{UserCreatedAt, UserEmail, UserId, UserName};
