//! Request field checks shared by the route handlers.

use chrono::NaiveDate;
use thiserror::Error;

use crate::mail::is_plausible_address;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Trimmed value of a required text field; blank counts as missing.
pub fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    optional(value).ok_or(ValidationError::Missing { field })
}

/// Trimmed value of an optional text field, with blank folded to `None`.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Required field holding something that looks like a mail address.
pub fn email(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    let value = required(field, value)?;
    if is_plausible_address(&value) {
        Ok(value)
    } else {
        Err(ValidationError::Invalid {
            field,
            reason: format!("'{value}' is not an email address"),
        })
    }
}

pub fn positive(field: &'static str, value: Option<f64>) -> Result<f64, ValidationError> {
    match value {
        None => Err(ValidationError::Missing { field }),
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        Some(v) => Err(ValidationError::Invalid {
            field,
            reason: format!("must be greater than zero, got {v}"),
        }),
    }
}

/// `YYYY-MM-DD`, the format HTML date inputs submit.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::Invalid {
        field,
        reason: format!("expected a YYYY-MM-DD date, got '{value}'"),
    })
}

pub fn optional_date(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<NaiveDate>, ValidationError> {
    optional(value).map(|v| parse_date(field, &v)).transpose()
}

/// Value must be one of `allowed`, compared exactly.
pub fn one_of(
    field: &'static str,
    value: String,
    allowed: &[&str],
) -> Result<String, ValidationError> {
    if allowed.contains(&value.as_str()) {
        Ok(value)
    } else {
        Err(ValidationError::Invalid {
            field,
            reason: format!("'{}' is not one of {}", value, allowed.join(", ")),
        })
    }
}
