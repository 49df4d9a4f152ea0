//! # Contact Details
//!
//! Email, phone number and person-name checks.

use std::sync::LazyLock;

use phonenumber::country;
use regex::Regex;

use crate::error::{reject, ValidationResult};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX is a valid regex pattern")
});

/// Length bounds for names given at signup and on employee records.
pub const NAME_LEN: (usize, usize) = (2, 50);

/// Length bounds for names on manager profiles.
pub const PROFILE_NAME_LEN: (usize, usize) = (2, 100);

/// Validate an email address.
///
/// ```
/// use meetdesk::contact::validate_email;
///
/// assert!(validate_email("user@example.com").is_ok());
/// assert!(validate_email("user@example").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if !EMAIL_REGEX.is_match(email) {
        return Err(reject("email", "Invalid email format"));
    }
    Ok(())
}

/// Validate a phone number written in international form (`+<country code>...`).
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    check_phone(phone, None)
}

/// Validate a phone number, reading numbers without a `+` prefix as
/// belonging to `region` (ISO 3166 alpha-2, e.g. `"US"`).
pub fn validate_phone_in_region(phone: &str, region: &str) -> ValidationResult<()> {
    let id = parse_region(region)
        .ok_or_else(|| reject("phone", format!("Unknown phone region: {region}")))?;
    check_phone(phone, Some(id))
}

/// Resolve a region code to a phone metadata id.
pub(crate) fn parse_region(region: &str) -> Option<country::Id> {
    region.to_ascii_uppercase().parse::<country::Id>().ok()
}

fn check_phone(phone: &str, region: Option<country::Id>) -> ValidationResult<()> {
    let number = phonenumber::parse(region, phone)
        .map_err(|_| reject("phone", "Invalid phone number format"))?;

    if !phonenumber::is_valid(&number) {
        return Err(reject("phone", "Invalid phone number"));
    }

    Ok(())
}

/// Validate a person's name: trimmed length must lie within `bounds`.
pub fn validate_person_name(name: &str, bounds: (usize, usize)) -> ValidationResult<()> {
    let (min, max) = bounds;
    let len = name.trim().chars().count();

    if len < min {
        return Err(reject(
            "name",
            format!("Name must be at least {min} characters"),
        ));
    }
    if len > max {
        return Err(reject(
            "name",
            format!("Name must not exceed {max} characters"),
        ));
    }

    Ok(())
}
