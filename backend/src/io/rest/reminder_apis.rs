//! # REST API for Reminders
//!
//! The daily digest and the per-birthday "wishes sent" flag.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::info;

use crate::io::rest::birthday_apis::TodayQuery;
use crate::io::rest::errors::{domain_error_response, resolve_today};
use crate::io::rest::mappers::{BirthdayMapper, ReminderMapper};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reminders", get(get_reminder_digest))
        .route("/birthdays/:id/sent", post(mark_sent).delete(reset_status))
}

/// Who celebrates today (with announcement recipients) and tomorrow
pub async fn get_reminder_digest(
    State(state): State<AppState>,
    Query(query): Query<TodayQuery>,
) -> impl IntoResponse {
    info!("GET /api/reminders - query: {:?}", query);

    let today = match resolve_today(query.today.as_deref()) {
        Ok(today) => today,
        Err(response) => return response,
    };

    match state.reminder_service.digest(today).await {
        Ok(digest) => (StatusCode::OK, Json(ReminderMapper::to_digest_dto(digest))).into_response(),
        Err(e) => domain_error_response("build reminder digest", e),
    }
}

pub async fn mark_sent(
    State(state): State<AppState>,
    Path(birthday_id): Path<String>,
) -> impl IntoResponse {
    info!("POST /api/birthdays/{}/sent", birthday_id);

    match state.reminder_service.mark_sent(&birthday_id).await {
        Ok(birthday) => (StatusCode::OK, Json(BirthdayMapper::to_dto(birthday))).into_response(),
        Err(e) => domain_error_response("mark birthday as sent", e),
    }
}

pub async fn reset_status(
    State(state): State<AppState>,
    Path(birthday_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/birthdays/{}/sent", birthday_id);

    match state.reminder_service.reset_status(&birthday_id).await {
        Ok(birthday) => (StatusCode::OK, Json(BirthdayMapper::to_dto(birthday))).into_response(),
        Err(e) => domain_error_response("reset birthday status", e),
    }
}
