//! Input checks shared by several handlers.

use crate::error::ApiError;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Trimmed, non-empty name
pub fn name(raw: &str, field: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Lowercased, trimmed email address
pub fn email(raw: &str) -> Result<String, ApiError> {
    let email = raw.trim().to_lowercase();
    let valid = EMAIL_RE.as_ref().is_some_and(|re| re.is_match(&email));
    if !valid {
        return Err(ApiError::Validation("Invalid email address".to_string()));
    }
    Ok(email)
}

pub fn password(raw: &str) -> Result<(), ApiError> {
    if raw.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::Validation(format!(
            "Password must have at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

pub fn non_negative(value: f64, field: &str) -> Result<(), ApiError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ApiError::Validation(format!("{field} must not be negative")));
    }
    Ok(())
}

pub fn non_negative_count(value: i32, field: &str) -> Result<(), ApiError> {
    if value < 0 {
        return Err(ApiError::Validation(format!("{field} must not be negative")));
    }
    Ok(())
}

pub fn date_range(start: Option<NaiveDate>, finish: Option<NaiveDate>) -> Result<(), ApiError> {
    match (start, finish) {
        (Some(start), Some(finish)) if start > finish => Err(ApiError::Validation(
            "startDate must not be after finishDate".to_string(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(name("  Robotics ", "name").unwrap(), "Robotics");
        assert!(name("   ", "name").is_err());
    }

    #[test]
    fn test_email() {
        assert_eq!(email(" Ana@Uni.PT ").unwrap(), "ana@uni.pt");
        assert!(email("ana@").is_err());
        assert!(email("not an email").is_err());
    }

    #[test]
    fn test_password_length() {
        assert!(password("1234567").is_err());
        assert!(password("12345678").is_ok());
    }

    #[test]
    fn test_numbers_and_dates() {
        assert!(non_negative(0.0, "cost").is_ok());
        assert!(non_negative(-0.5, "cost").is_err());
        assert!(non_negative(f64::NAN, "cost").is_err());
        assert!(non_negative_count(-1, "quantity").is_err());

        let jan = NaiveDate::from_ymd_opt(2024, 1, 1);
        let feb = NaiveDate::from_ymd_opt(2024, 2, 1);
        assert!(date_range(jan, feb).is_ok());
        assert!(date_range(feb, jan).is_err());
        assert!(date_range(None, jan).is_ok());
    }
}
