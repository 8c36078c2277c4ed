//! Domain model for a birthday entry, plus the ingestion-boundary validation
//! every create, update and import goes through.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use shared::BirthdayStatus;
use uuid::Uuid;

use crate::domain::schedule::HasBirthDate;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_MESSAGE_LENGTH: usize = 500;
pub const MIN_BIRTH_YEAR: i32 = 1900;
pub const MAX_BIRTH_YEAR: i32 = 2100;

/// Formats accepted for incoming birth dates, tried in order
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y"];

#[derive(Debug, Clone, PartialEq)]
pub struct Birthday {
    pub id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub email: Option<String>,
    pub message: Option<String>,
    pub status: BirthdayStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Birthday {
    pub fn generate_id() -> String {
        format!("birthday::{}", Uuid::new_v4())
    }

    /// Lowercased match against name, message and the ISO date
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        self.name.to_lowercase().contains(&term)
            || self
                .message
                .as_deref()
                .map(|m| m.to_lowercase().contains(&term))
                .unwrap_or(false)
            || self.birth_date.format("%Y-%m-%d").to_string().contains(&term)
    }
}

impl HasBirthDate for Birthday {
    fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BirthdayValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Name cannot exceed {} characters", MAX_NAME_LENGTH)]
    NameTooLong,
    #[error("Birth date is required")]
    MissingDate,
    #[error("Invalid birth date: '{0}'")]
    InvalidDate(String),
    #[error("Birth year must be between {min} and {max}, got {0}", min = MIN_BIRTH_YEAR, max = MAX_BIRTH_YEAR)]
    YearOutOfRange(i32),
    #[error("Invalid email address: '{0}'")]
    InvalidEmail(String),
    #[error("Message cannot exceed {} characters", MAX_MESSAGE_LENGTH)]
    MessageTooLong,
}

#[derive(Debug, thiserror::Error)]
pub enum BirthdayError {
    #[error("Birthday not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Validation(#[from] BirthdayValidationError),
}

/// Trimmed, non-empty, bounded name
pub fn validate_name(name: &str) -> Result<String, BirthdayValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(BirthdayValidationError::EmptyName);
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(BirthdayValidationError::NameTooLong);
    }
    Ok(trimmed.to_string())
}

/// Parse a birth date in any of the accepted formats.
/// RFC 3339 timestamps are accepted too and reduced to their calendar date.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, BirthdayValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BirthdayValidationError::MissingDate);
    }

    let parsed = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .ok_or_else(|| BirthdayValidationError::InvalidDate(trimmed.to_string()))?;

    if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&parsed.year()) {
        return Err(BirthdayValidationError::YearOutOfRange(parsed.year()));
    }

    Ok(parsed)
}

/// Blank input means "no email". Anything else must look like local@domain.tld
pub fn normalize_email(email: Option<&str>) -> Result<Option<String>, BirthdayValidationError> {
    let Some(raw) = email.map(str::trim).filter(|e| !e.is_empty()) else {
        return Ok(None);
    };

    let invalid = || BirthdayValidationError::InvalidEmail(raw.to_string());

    if raw.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = raw.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }

    Ok(Some(raw.to_string()))
}

/// Blank input means "no message"
pub fn normalize_message(message: Option<&str>) -> Result<Option<String>, BirthdayValidationError> {
    let Some(raw) = message.map(str::trim).filter(|m| !m.is_empty()) else {
        return Ok(None);
    };
    if raw.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(BirthdayValidationError::MessageTooLong);
    }
    Ok(Some(raw.to_string()))
}
