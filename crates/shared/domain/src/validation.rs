//! Field validation for raw registration and employee payloads.
//!
//! Both validators are pure and fail fast: rules run in a fixed order and the
//! first violation is returned. The input is never modified.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::constants::{MAX_PHONE_DIGITS, MIN_PASSWORD_LENGTH, MIN_PHONE_DIGITS, PASSWORD_SYMBOLS};
use crate::error::{DomainError, DomainResult};

/// Raw registration payload as submitted by the client.
///
/// Every field is optional so that a missing field reaches the validator
/// and fails with its own message instead of a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistrationInput {
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub location: Option<String>,
    pub cedula: Option<String>,
    pub avatar_url: Option<String>,
}

/// Registration data that passed [`validate_user_data`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedRegistration {
    pub first_name: String,
    pub last_name: String,
    pub cedula: Option<String>,
    /// Digits only, 8 to 15 of them
    pub phone: String,
    /// Trimmed and lower-cased
    pub email: String,
    pub password: String,
    pub role: String,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
}

/// Raw employee profile payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EmployeeInput {
    pub titles: Option<String>,
    pub description: Option<String>,
    pub ocupation: Option<String>,
    pub documentation: Option<String>,
}

/// Employee profile data that passed [`validate_employee_data`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedEmployee {
    pub titles: String,
    pub description: Option<String>,
    pub ocupation: String,
    pub documentation: String,
}

/// Validate and normalize a registration payload.
///
/// # Errors
/// Returns the first violated rule as a validation error, checking in order:
/// name, phone, email, password, role.
pub fn validate_user_data(input: &RegistrationInput) -> DomainResult<ValidatedRegistration> {
    let display_name = [&input.full_name, &input.first_name, &input.name]
        .into_iter()
        .find_map(non_blank)
        .ok_or_else(|| DomainError::validation("Name is required"))?;

    let mut parts = display_name.split_whitespace();
    // non_blank guarantees at least one token
    let first_name = parts.next().unwrap_or_default().to_string();
    let last_name = parts.collect::<Vec<_>>().join(" ");

    let phone = normalize_phone(input.phone.as_deref().unwrap_or_default())?;
    let email = normalize_email(input.email.as_deref().unwrap_or_default())?;

    let password = input.password.clone().unwrap_or_default();
    check_password(&password)?;

    let role = non_blank(&input.role)
        .ok_or_else(|| DomainError::validation("Role is required"))?
        .to_string();

    Ok(ValidatedRegistration {
        first_name,
        last_name,
        cedula: trimmed_or_none(&input.cedula),
        phone,
        email,
        password,
        role,
        location: trimmed_or_none(&input.location),
        avatar_url: trimmed_or_none(&input.avatar_url),
    })
}

/// Validate and normalize an employee profile payload.
///
/// # Errors
/// Returns a validation error for the first of `titles`, `ocupation`,
/// `documentation` that is blank.
pub fn validate_employee_data(input: &EmployeeInput) -> DomainResult<ValidatedEmployee> {
    let titles = required(&input.titles, "Titles are required")?;
    let ocupation = required(&input.ocupation, "Ocupation is required")?;
    let documentation = required(&input.documentation, "Documentation is required")?;

    Ok(ValidatedEmployee {
        titles,
        description: trimmed_or_none(&input.description),
        ocupation,
        documentation,
    })
}

/// Keep the ASCII digits of a phone number and check their count.
///
/// A leading international prefix (`+` and one to three digits followed by a
/// separator) is dropped only when the rest still holds a full number, so
/// `+1 (555) 123-4567` becomes `5551234567` while `+12 345678` keeps all
/// eight digits. Without a separator the prefix cannot be told apart and is
/// kept.
pub fn normalize_phone(raw: &str) -> DomainResult<String> {
    let national = digits_of(national_part(raw));
    let digits = if national.len() >= MIN_PHONE_DIGITS {
        national
    } else {
        digits_of(raw)
    };
    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
        return Err(DomainError::validation(format!(
            "Phone number must have between {} and {} digits",
            MIN_PHONE_DIGITS, MAX_PHONE_DIGITS
        )));
    }
    Ok(digits)
}

/// Trim and lower-case an email address, then check its shape.
pub fn normalize_email(raw: &str) -> DomainResult<String> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(DomainError::validation("Email is required"));
    }
    if !email.validate_email() {
        return Err(DomainError::validation("Invalid email format"));
    }
    Ok(email)
}

/// Check password length and composition.
pub fn check_password(password: &str) -> DomainResult<()> {
    if password.is_empty() {
        return Err(DomainError::validation("Password is required"));
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    if !(has_letter && has_digit && has_symbol) {
        return Err(DomainError::validation(format!(
            "Password must contain a letter, a number and one of {}",
            PASSWORD_SYMBOLS
        )));
    }
    Ok(())
}

fn digits_of(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

fn national_part(raw: &str) -> &str {
    let trimmed = raw.trim_start();
    if let Some(rest) = trimmed.strip_prefix('+') {
        let code_len = rest.chars().take_while(char::is_ascii_digit).count();
        if (1..=3).contains(&code_len) && code_len < rest.len() {
            return &rest[code_len..];
        }
    }
    raw
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn trimmed_or_none(field: &Option<String>) -> Option<String> {
    non_blank(field).map(str::to_string)
}

fn required(field: &Option<String>, message: &str) -> DomainResult<String> {
    non_blank(field)
        .map(str::to_string)
        .ok_or_else(|| DomainError::validation(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> RegistrationInput {
        RegistrationInput {
            full_name: Some("Ana Maria Lopez".into()),
            phone: Some("+1 (555) 123-4567".into()),
            email: Some("ANA@Example.com".into()),
            password: Some("Secret1!".into()),
            role: Some("user".into()),
            ..Default::default()
        }
    }

    fn message(result: DomainResult<ValidatedRegistration>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_valid_registration() {
        let record = validate_user_data(&ana()).unwrap();

        assert_eq!(
            record,
            ValidatedRegistration {
                first_name: "Ana".into(),
                last_name: "Maria Lopez".into(),
                cedula: None,
                phone: "5551234567".into(),
                email: "ana@example.com".into(),
                password: "Secret1!".into(),
                role: "user".into(),
                location: None,
                avatar_url: None,
            }
        );
    }

    #[test]
    fn test_phone_without_country_code() {
        let input = RegistrationInput {
            phone: Some("(555) 123-4567".into()),
            ..ana()
        };
        assert_eq!(validate_user_data(&input).unwrap().phone, "5551234567");
    }

    #[test]
    fn test_phone_prefix_without_separator_is_kept() {
        assert_eq!(normalize_phone("+15551234567").unwrap(), "15551234567");
        assert_eq!(normalize_phone("+506 8888-7777").unwrap(), "88887777");
        assert_eq!(normalize_phone("0044 20 7946 0958").unwrap(), "00442079460958");
    }

    #[test]
    fn test_phone_short_national_part_keeps_prefix() {
        assert_eq!(normalize_phone("+12 345678").unwrap(), "12345678");
        assert_eq!(normalize_phone("+1 (555) 123-4567").unwrap(), "5551234567");
        assert!(normalize_phone("+1 234567").is_err());
    }

    #[test]
    fn test_name_source_precedence() {
        let input = RegistrationInput {
            full_name: Some("   ".into()),
            first_name: Some("Luis".into()),
            name: Some("Ignored Name".into()),
            ..ana()
        };
        let record = validate_user_data(&input).unwrap();
        assert_eq!(record.first_name, "Luis");
        assert_eq!(record.last_name, "");

        let input = RegistrationInput {
            full_name: None,
            name: Some("  Sofia   de  la Cruz ".into()),
            ..ana()
        };
        let record = validate_user_data(&input).unwrap();
        assert_eq!(record.first_name, "Sofia");
        assert_eq!(record.last_name, "de la Cruz");
    }

    #[test]
    fn test_missing_name() {
        let input = RegistrationInput {
            full_name: None,
            ..ana()
        };
        assert_eq!(message(validate_user_data(&input)), "Name is required");
    }

    #[test]
    fn test_phone_digit_bounds() {
        for bad in ["1234567", "1234567890123456", "", "phone"] {
            let input = RegistrationInput {
                phone: Some(bad.into()),
                ..ana()
            };
            assert!(message(validate_user_data(&input)).contains("Phone"), "{bad}");
        }
        for ok in ["12345678", "123456789012345"] {
            let input = RegistrationInput {
                phone: Some(ok.into()),
                ..ana()
            };
            assert!(validate_user_data(&input).is_ok(), "{ok}");
        }
    }

    #[test]
    fn test_email_rules() {
        let blank = RegistrationInput {
            email: Some("  ".into()),
            ..ana()
        };
        assert_eq!(message(validate_user_data(&blank)), "Email is required");

        let malformed = RegistrationInput {
            email: Some("ana.example.com".into()),
            ..ana()
        };
        assert_eq!(message(validate_user_data(&malformed)), "Invalid email format");

        let padded = RegistrationInput {
            email: Some("  Ana@Example.COM ".into()),
            ..ana()
        };
        assert_eq!(validate_user_data(&padded).unwrap().email, "ana@example.com");
    }

    #[test]
    fn test_password_length_error() {
        let input = RegistrationInput {
            password: Some("short1".into()),
            ..ana()
        };
        assert!(message(validate_user_data(&input)).contains("at least 8 characters"));
    }

    #[test]
    fn test_password_composition_error() {
        for weak in ["longenough", "longenough1", "longenough!", "12345678!"] {
            let input = RegistrationInput {
                password: Some(weak.into()),
                ..ana()
            };
            assert!(message(validate_user_data(&input)).contains("must contain"), "{weak}");
        }
    }

    #[test]
    fn test_password_required() {
        let input = RegistrationInput {
            password: None,
            ..ana()
        };
        assert_eq!(message(validate_user_data(&input)), "Password is required");
    }

    #[test]
    fn test_role_required() {
        let input = RegistrationInput {
            role: Some(" ".into()),
            ..ana()
        };
        assert_eq!(message(validate_user_data(&input)), "Role is required");
    }

    #[test]
    fn test_first_failure_wins() {
        // Bad phone and bad email: phone is checked first
        let input = RegistrationInput {
            phone: Some("123".into()),
            email: Some("nope".into()),
            password: Some("x".into()),
            ..ana()
        };
        assert!(message(validate_user_data(&input)).contains("Phone"));
    }

    #[test]
    fn test_optional_fields_are_trimmed() {
        let input = RegistrationInput {
            location: Some("  San Jose ".into()),
            cedula: Some("   ".into()),
            avatar_url: Some("https://cdn.example.com/a.png".into()),
            ..ana()
        };
        let record = validate_user_data(&input).unwrap();
        assert_eq!(record.location.as_deref(), Some("San Jose"));
        assert_eq!(record.cedula, None);
        assert_eq!(record.avatar_url.as_deref(), Some("https://cdn.example.com/a.png"));
    }

    #[test]
    fn test_validation_is_pure() {
        let input = ana();
        let snapshot = input.clone();

        let first = validate_user_data(&input).unwrap();
        let second = validate_user_data(&input).unwrap();

        assert_eq!(first, second);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_registration_input_from_json() {
        let input: RegistrationInput =
            serde_json::from_str(r#"{"name":"Ana","email":"a@b.co"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("Ana"));
        assert!(input.phone.is_none());
    }

    #[test]
    fn test_employee_blank_titles() {
        let input = EmployeeInput {
            titles: Some("  ".into()),
            ocupation: Some("plumber".into()),
            documentation: Some("10 years".into()),
            ..Default::default()
        };
        let err = validate_employee_data(&input).unwrap_err();
        assert_eq!(err.to_string(), "Titles are required");
    }

    #[test]
    fn test_employee_field_order() {
        let input = EmployeeInput {
            titles: Some("Master plumber".into()),
            ..Default::default()
        };
        assert_eq!(
            validate_employee_data(&input).unwrap_err().to_string(),
            "Ocupation is required"
        );

        let input = EmployeeInput {
            titles: Some("Master plumber".into()),
            ocupation: Some("plumber".into()),
            ..Default::default()
        };
        assert_eq!(
            validate_employee_data(&input).unwrap_err().to_string(),
            "Documentation is required"
        );
    }

    #[test]
    fn test_employee_valid() {
        let input = EmployeeInput {
            titles: Some(" Master plumber ".into()),
            description: Some("  ".into()),
            ocupation: Some("plumber".into()),
            documentation: Some(" 10 years ".into()),
        };
        let record = validate_employee_data(&input).unwrap();
        assert_eq!(record.titles, "Master plumber");
        assert_eq!(record.description, None);
        assert_eq!(record.documentation, "10 years");
    }
}
