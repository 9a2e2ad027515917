//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement (in characters)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Symbols of which a password must contain at least one
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Minimum number of digits in a phone number
pub const MIN_PHONE_DIGITS: usize = 8;

/// Maximum number of digits in a phone number
pub const MAX_PHONE_DIGITS: usize = 15;
