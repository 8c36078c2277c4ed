//! # REST API for Data Export
//!
//! CSV download of every stored birthday.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::info;

use crate::io::rest::errors::domain_error_response;
use crate::AppState;

const EXPORT_FILE_NAME: &str = "birthdays.csv";

pub fn router() -> Router<AppState> {
    Router::new().route("/birthdays/export", get(export_birthdays_csv))
}

/// Export all birthdays as a CSV attachment
pub async fn export_birthdays_csv(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/birthdays/export");

    match state.export_service.export_csv().await {
        Ok(csv) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
                ),
            ],
            csv,
        )
            .into_response(),
        Err(e) => domain_error_response("export birthdays", e),
    }
}
