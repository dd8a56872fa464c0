use chrono::NaiveDate;
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// A rejected form field. The message is shown to the visitor or admin as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn required(field: &'static str, label: &str) -> Self {
        Self::new(field, format!("{label} is required"))
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        RegexBuilder::new(r"^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$")
            .case_insensitive(true)
            .build()
            .expect("email pattern compiles")
    })
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Trimmed, non-empty text or a `required` error.
pub fn required_text(
    field: &'static str,
    label: &str,
    value: &str,
) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::required(field, label));
    }
    Ok(value.to_string())
}

/// Blank form inputs are stored as NULL.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn required<T>(field: &'static str, label: &str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::required(field, label))
}

pub fn min_chars(
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        return Err(ValidationError::new(
            field,
            format!("{label} must be at least {min} characters"),
        ));
    }
    Ok(())
}

/// `YYYY-MM-DD` as sent by a date input; blank means no date.
pub fn optional_date(
    field: &'static str,
    label: &str,
    value: Option<String>,
) -> Result<Option<NaiveDate>, ValidationError> {
    match optional_text(value) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ValidationError::new(field, format!("{label} must be a valid date"))),
    }
}

pub fn required_date(
    field: &'static str,
    label: &str,
    value: Option<String>,
) -> Result<NaiveDate, ValidationError> {
    optional_date(field, label, value)?.ok_or_else(|| ValidationError::required(field, label))
}
