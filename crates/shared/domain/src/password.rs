//! Password hashing port and its Argon2 implementation.
//!
//! Hashing is handed to the code that needs it as an explicit handle
//! (`Arc<dyn PasswordHasher>`), never looked up globally.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Argon2,
};

use crate::error::{DomainError, DomainResult};

/// Turns plain-text passwords into storable hashes.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain-text password.
    fn hash(&self, plain_text: &str) -> DomainResult<String>;

    /// Check a plain-text password against a stored hash.
    fn verify(&self, plain_text: &str, hash: &str) -> bool;
}

/// Argon2id with default parameters and a random salt per hash.
#[derive(Debug, Default, Clone, Copy)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify(&self, plain_text: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
