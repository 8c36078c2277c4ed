//! # REST API for Bulk Import
//!
//! Accepts rows the client already parsed out of a spreadsheet or CSV file.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use tracing::info;

use crate::io::rest::errors::domain_error_response;
use crate::io::rest::mappers::ImportMapper;
use crate::AppState;
use shared::ImportBirthdaysRequest;

pub fn router() -> Router<AppState> {
    Router::new().route("/birthdays/import", post(import_birthdays))
}

/// Import rows one by one. Always 200 when the batch ran; per-row failures
/// are reported in the body.
pub async fn import_birthdays(
    State(state): State<AppState>,
    Json(request): Json<ImportBirthdaysRequest>,
) -> impl IntoResponse {
    info!("POST /api/birthdays/import - {} rows", request.rows.len());

    let command = ImportMapper::to_command(request);
    match state.import_service.import_birthdays(command).await {
        Ok(report) => (StatusCode::OK, Json(ImportMapper::to_response_dto(report))).into_response(),
        Err(e) => domain_error_response("import birthdays", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::test_support::{send, setup_test_state};
    use axum::http::Method;
    use serde_json::json;
    use shared::{BirthdayListResponse, ImportBirthdaysResponse};

    #[tokio::test]
    async fn test_import_reports_each_row() {
        let app = router()
            .merge(crate::io::rest::birthday_apis::router())
            .with_state(setup_test_state().await);

        let (status, body) = send(
            &app,
            Method::POST,
            "/birthdays/import",
            Some(json!({
                "rows": [
                    { "name": "Ada", "date": "1990-12-10", "email": "ada@example.com" },
                    { "name": "", "date": "1990-01-01" },
                    { "name": "Grace", "date": "December 09, 1906" },
                    { "date": "1990-01-01" },
                    { "name": "Bad", "date": "1990-02-30" }
                ]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let report: ImportBirthdaysResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.imported, 2);
        assert_eq!(report.failed, 3);
        assert_eq!(report.results.len(), 5);

        assert!(report.results[0].birthday.is_some());
        assert!(report.results[0].error.is_none());
        assert_eq!(report.results[1].error.as_deref(), Some("Name cannot be empty"));
        assert_eq!(
            report.results[2].birthday.as_ref().map(|b| b.birth_date.as_str()),
            Some("1906-12-09")
        );
        assert_eq!(report.results[3].error.as_deref(), Some("Name cannot be empty"));
        assert_eq!(report.results[4].row, 4);
        assert!(report.results[4].error.is_some());

        let (_, body) = send(&app, Method::GET, "/birthdays", None).await;
        let list: BirthdayListResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(list.birthdays.len(), 2);
    }

    #[tokio::test]
    async fn test_import_empty_batch() {
        let app = router().with_state(setup_test_state().await);

        let (status, body) = send(&app, Method::POST, "/birthdays/import", Some(json!({ "rows": [] }))).await;

        assert_eq!(status, StatusCode::OK);
        let report: ImportBirthdaysResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.imported, 0);
        assert_eq!(report.failed, 0);
        assert!(report.results.is_empty());
    }
}
