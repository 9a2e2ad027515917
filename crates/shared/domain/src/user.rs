//! User aggregate and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{UserCreatedAt, UserEmail, UserId, UserName};

/// User aggregate root.
///
/// Owns its value objects exclusively. `updated_at` is stamped on every
/// construction and has no setter; an edit builds a new `User`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    id: UserId,
    name: UserName,
    last_name: String,
    email: UserEmail,
    #[serde(skip_serializing)]
    password: String,
    role: String,
    is_verified: bool,
    created_at: UserCreatedAt,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Build a user from already-validated value objects.
    ///
    /// `password` is stored as given: hashed or not is the caller's choice.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: UserId,
        name: UserName,
        last_name: String,
        email: UserEmail,
        password: String,
        role: String,
        is_verified: bool,
        created_at: UserCreatedAt,
    ) -> Self {
        Self {
            id,
            name,
            last_name,
            email,
            password,
            role,
            is_verified,
            created_at,
            updated_at: Utc::now(),
        }
    }

    /// Rehydrate a stored user, keeping its stored `updated_at`.
    /// Only repository adapters should call this.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persistence(
        id: UserId,
        name: UserName,
        last_name: String,
        email: UserEmail,
        password: String,
        role: String,
        is_verified: bool,
        created_at: UserCreatedAt,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            last_name,
            email,
            password,
            role,
            is_verified,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &UserEmail {
        &self.email
    }

    /// Stored password (hash or plain text, depending on the creator)
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn is_verified(&self) -> bool {
        self.is_verified
    }

    pub fn created_at(&self) -> &UserCreatedAt {
        &self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique user identifier
    pub id: String,
    /// Given name
    pub name: String,
    /// Family name(s)
    pub last_name: String,
    /// Email address
    pub email: String,
    /// User role
    pub role: String,
    /// Whether the email address has been verified
    pub is_verified: bool,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.to_string(),
            last_name: user.last_name.clone(),
            email: user.email.to_string(),
            role: user.role.clone(),
            is_verified: user.is_verified,
            created_at: user.created_at.value(),
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse::from(&user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample(created_at: DateTime<Utc>) -> User {
        User::new(
            UserId::new("u-1").unwrap(),
            UserName::new("Ana").unwrap(),
            "Maria Lopez".to_string(),
            UserEmail::new("ana@example.com").unwrap(),
            "Secret1!".to_string(),
            "user".to_string(),
            false,
            UserCreatedAt::new(created_at).unwrap(),
        )
    }

    #[test]
    fn test_new_stamps_updated_at() {
        let before = Utc::now();
        let user = sample(before - Duration::days(3));
        let after = Utc::now();

        assert!(user.updated_at() >= before);
        assert!(user.updated_at() <= after);
        assert!(user.created_at().value() < user.updated_at());
    }

    #[test]
    fn test_from_persistence_keeps_updated_at() {
        let stamp = Utc::now() - Duration::days(1);
        let user = User::from_persistence(
            UserId::new("u-2").unwrap(),
            UserName::new("Luis").unwrap(),
            String::new(),
            UserEmail::new("luis@example.com").unwrap(),
            "hash".to_string(),
            "employee".to_string(),
            true,
            UserCreatedAt::new(stamp).unwrap(),
            stamp,
        );

        assert_eq!(user.updated_at(), stamp);
        assert!(user.is_verified());
        assert_eq!(user.last_name(), "");
    }

    #[test]
    fn test_serialization_hides_password() {
        let user = sample(Utc::now());
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "ana@example.com");
        assert_eq!(json["id"], "u-1");
    }

    #[test]
    fn test_response_from_user() {
        let user = sample(Utc::now());
        let response = UserResponse::from(&user);

        assert_eq!(response.name, "Ana");
        assert_eq!(response.last_name, "Maria Lopez");
    }
}
