//! Value objects owned by the [`User`](crate::User) aggregate.
//!
//! Each type wraps a single primitive and checks one invariant when it is
//! built. Once built a value object never changes. Deserialization runs the
//! same constructor, so a value read from JSON or a database row holds the
//! same invariant as one built in code.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

// =============================================================================
// UserId
// =============================================================================

/// Opaque identifier of a user. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Wrap an identifier.
    ///
    /// # Errors
    /// Returns a validation error if `value` is empty or only whitespace.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("User id must not be empty"));
        }
        Ok(Self(value))
    }

    /// Generate a fresh random identifier (UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserId {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// UserName
// =============================================================================

/// A person's given name. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Wrap a given name.
    ///
    /// # Errors
    /// Returns a validation error if `value` is empty after trimming.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("Name must not be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserName {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

// =============================================================================
// UserEmail
// =============================================================================

/// Email address of a user.
///
/// The only invariant is the presence of `@`. Full format checking and
/// lower-casing happen in [`validate_user_data`](crate::validate_user_data),
/// which guards untrusted input before it gets here. This type also has to
/// accept rows that were stored before that validator existed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserEmail(String);

impl UserEmail {
    /// Wrap an email address as given. Callers normalize case first.
    ///
    /// # Errors
    /// Returns a validation error if `value` does not contain `@`.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !value.contains('@') {
            return Err(DomainError::validation(format!(
                "'{}' is not a valid email address",
                value
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for UserEmail {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<UserEmail> for String {
    fn from(email: UserEmail) -> Self {
        email.0
    }
}

// =============================================================================
// UserCreatedAt
// =============================================================================

/// Creation timestamp of a user. Never later than the moment it was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateTime<Utc>", into = "DateTime<Utc>")]
pub struct UserCreatedAt(DateTime<Utc>);

impl UserCreatedAt {
    /// Wrap a timestamp, checking it against the current wall clock.
    ///
    /// # Errors
    /// Returns a validation error if `value` is in the future.
    pub fn new(value: DateTime<Utc>) -> DomainResult<Self> {
        Self::new_as_of(value, Utc::now())
    }

    /// Wrap a timestamp, checking it against an explicit `now`.
    /// Arbitrarily old timestamps are accepted.
    pub fn new_as_of(value: DateTime<Utc>, now: DateTime<Utc>) -> DomainResult<Self> {
        if value > now {
            return Err(DomainError::validation(format!(
                "Creation date {} is in the future",
                value.to_rfc3339()
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for UserCreatedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl TryFrom<DateTime<Utc>> for UserCreatedAt {
    type Error = DomainError;

    fn try_from(value: DateTime<Utc>) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<UserCreatedAt> for DateTime<Utc> {
    fn from(created_at: UserCreatedAt) -> Self {
        created_at.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_user_id_rejects_empty() {
        assert!(UserId::new("").is_err());
        assert!(UserId::new("   ").is_err());
        assert_eq!(UserId::new("u-1").unwrap().as_str(), "u-1");
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(UserId::generate(), UserId::generate());
    }

    #[test]
    fn test_user_name_rejects_blank() {
        let err = UserName::new(" \t").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(UserName::new("Ana").unwrap().as_str(), "Ana");
    }

    #[test]
    fn test_user_email_requires_at_sign() {
        for ok in ["a@b", "@", "ana@example.com", "ANA@Example.com"] {
            assert!(UserEmail::new(ok).is_ok(), "{ok} should be accepted");
        }
        for bad in ["", "ana.example.com", "ana"] {
            assert!(UserEmail::new(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_user_email_keeps_case() {
        // Normalization is the caller's job
        let email = UserEmail::new("Ana@Example.com").unwrap();
        assert_eq!(email.as_str(), "Ana@Example.com");
    }

    #[test]
    fn test_created_at_rejects_future() {
        let future = Utc::now() + Duration::hours(1);
        let err = UserCreatedAt::new(future).unwrap_err();
        assert!(err.to_string().contains("in the future"));
    }

    #[test]
    fn test_created_at_accepts_now_and_past() {
        let now = Utc::now();
        assert!(UserCreatedAt::new_as_of(now, now).is_ok());
        assert!(UserCreatedAt::new(now - Duration::seconds(1)).is_ok());
        assert!(UserCreatedAt::new(now - Duration::days(365 * 30)).is_ok());
    }

    #[test]
    fn test_created_at_boundary_against_explicit_now() {
        let now = Utc::now();
        let later = now + Duration::milliseconds(1);
        assert!(UserCreatedAt::new_as_of(later, now).is_err());
    }

    #[test]
    fn test_deserialize_runs_constructor() {
        let ok: UserEmail = serde_json::from_str("\"a@b.co\"").unwrap();
        assert_eq!(ok.as_str(), "a@b.co");

        let bad = serde_json::from_str::<UserEmail>("\"nope\"");
        assert!(bad.is_err());

        let blank = serde_json::from_str::<UserId>("\"\"");
        assert!(blank.is_err());
    }

    #[test]
    fn test_serialize_is_transparent() {
        let id = UserId::new("abc").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}
