//! Per-field validation rules for candidate answers.

use std::sync::LazyLock;

use regex::Regex;

use super::model::Field;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").unwrap());

static LOCATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").unwrap());

/// Why an answer was rejected. The Display strings are shown to the
/// candidate verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your full name (first name and last name).")]
    NameTooFewParts,

    #[error("Each part of your name must have at least 2 characters.")]
    NamePartTooShort,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Phone number must contain 10-15 digits only.")]
    InvalidPhone,

    #[error("Experience must be a number between 0 and 50.")]
    InvalidExperience,

    #[error("Please avoid abbreviations. Enter the full role name.")]
    RoleAbbreviation,

    #[error("Please enter the full role name (e.g., Data Analyst).")]
    RoleTooShort,

    #[error("Please enter a valid city name (e.g., Kolkata).")]
    LocationTooShort,

    #[error("Location should contain only letters.")]
    LocationOnlyLetters,

    #[error("Please list at least one technology.")]
    NoTechnologies,
}

/// Validate a raw candidate answer for a field.
///
/// Pure function: input is trimmed before rule evaluation, nothing is
/// stored. Rejection never mutates session state; the controller re-prompts
/// with the error's Display string.
pub fn validate(field: Field, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();

    match field {
        Field::FullName => {
            let parts: Vec<&str> = value.split_whitespace().collect();
            if parts.len() < 2 {
                return Err(ValidationError::NameTooFewParts);
            }
            if parts.iter().any(|part| part.chars().count() < 2) {
                return Err(ValidationError::NamePartTooShort);
            }
            Ok(())
        }

        Field::Email => {
            if !EMAIL_PATTERN.is_match(value) {
                return Err(ValidationError::InvalidEmail);
            }
            Ok(())
        }

        Field::Phone => {
            let all_digits = !value.is_empty() && value.chars().all(|c| c.is_ascii_digit());
            if !all_digits || !(10..=15).contains(&value.len()) {
                return Err(ValidationError::InvalidPhone);
            }
            Ok(())
        }

        Field::Experience => {
            if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
                return Err(ValidationError::InvalidExperience);
            }
            let years: u32 = value.parse().map_err(|_| ValidationError::InvalidExperience)?;
            if years > 50 {
                return Err(ValidationError::InvalidExperience);
            }
            Ok(())
        }

        Field::DesiredRole => {
            // Abbreviation check first, or the length rule would shadow it.
            let has_letters = value.chars().any(char::is_alphabetic);
            let all_upper = value
                .chars()
                .filter(|c| c.is_alphabetic())
                .all(char::is_uppercase);
            if has_letters && all_upper && value.chars().count() <= 4 {
                return Err(ValidationError::RoleAbbreviation);
            }
            if value.chars().count() < 5 {
                return Err(ValidationError::RoleTooShort);
            }
            Ok(())
        }

        Field::Location => {
            if value.chars().count() < 4 {
                return Err(ValidationError::LocationTooShort);
            }
            if !LOCATION_PATTERN.is_match(value) {
                return Err(ValidationError::LocationOnlyLetters);
            }
            Ok(())
        }

        Field::TechStack => {
            if !value.split(',').any(|segment| !segment.trim().is_empty()) {
                return Err(ValidationError::NoTechnologies);
            }
            Ok(())
        }
    }
}
