//! Translation of domain failures and bad query input into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{Datelike, Local, NaiveDate};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::models::birthday::{
    BirthdayError, BirthdayValidationError, MAX_BIRTH_YEAR, MIN_BIRTH_YEAR,
};
use crate::io::rest::mappers::birthday_mapper::DATE_FORMAT;

/// JSON error body: `{"error": "..."}`
pub fn error_body(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// Validation problems become 400, missing records 404, anything else 500
/// with the details kept in the log.
pub fn domain_error_response(action: &str, e: anyhow::Error) -> Response {
    if let Some(validation) = e.downcast_ref::<BirthdayValidationError>() {
        warn!("Rejected request to {}: {}", action, validation);
        return error_body(StatusCode::BAD_REQUEST, validation.to_string());
    }

    match e.downcast_ref::<BirthdayError>() {
        Some(BirthdayError::NotFound(id)) => {
            warn!("Failed to {}: birthday not found: {}", action, id);
            error_body(StatusCode::NOT_FOUND, format!("Birthday not found: {}", id))
        }
        Some(BirthdayError::Validation(validation)) => {
            warn!("Rejected request to {}: {}", action, validation);
            error_body(StatusCode::BAD_REQUEST, validation.to_string())
        }
        None => {
            error!("Failed to {}: {:?}", action, e);
            error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to {}", action),
            )
        }
    }
}

/// The reference date for a request: the `today` query parameter when given,
/// otherwise the server's local date. A given date must fall in the same year
/// range as birth dates.
pub fn resolve_today(today: Option<&str>) -> Result<NaiveDate, Response> {
    let Some(raw) = today.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(Local::now().date_naive());
    };

    let parsed = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        warn!("Invalid today parameter: {}", raw);
        error_body(
            StatusCode::BAD_REQUEST,
            format!("Invalid date for 'today', expected YYYY-MM-DD: {}", raw),
        )
    })?;

    if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&parsed.year()) {
        warn!("Out of range today parameter: {}", raw);
        return Err(error_body(
            StatusCode::BAD_REQUEST,
            format!(
                "Year of 'today' must be between {} and {}: {}",
                MIN_BIRTH_YEAR, MAX_BIRTH_YEAR, raw
            ),
        ));
    }

    Ok(parsed)
}
