//! # Birthday Tracker Backend
//!
//! Keeps a list of people's birthdays and answers the questions a birthday
//! dashboard asks: whose birthday is next, how many days away it is, and which
//! section (This Week, Next Week, This Month, Next Month, Later) it belongs in.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (axum REST handlers, DTO mappers)
//!     ↓
//! Domain Layer (services, recurrence and bucketing)
//!     ↓
//! Storage Layer (SQLite via sqlx)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{BirthdayService, ExportService, ImportService, ReminderService};
use crate::storage::{BirthdayRepository, BirthdayStorage, DbConnection};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub birthday_service: BirthdayService,
    pub import_service: ImportService,
    pub reminder_service: ReminderService,
    pub export_service: ExportService,
}

impl AppState {
    /// Wire every service to one SQLite-backed repository
    pub fn new(db: DbConnection) -> Self {
        let storage: Arc<dyn BirthdayStorage> = Arc::new(BirthdayRepository::new(db));

        Self {
            birthday_service: BirthdayService::new(storage.clone()),
            import_service: ImportService::new(storage.clone()),
            reminder_service: ReminderService::new(storage.clone()),
            export_service: ExportService::new(storage),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db_conn = DbConnection::init(config).await?;

    info!("Setting up application state");
    Ok(AppState::new(db_conn))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors_origin: &str) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", cors_origin, e))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Ok(Router::new()
        .route("/", get(health))
        .nest("/api", io::rest::api_router())
        .layer(cors)
        .with_state(app_state))
}

async fn health() -> &'static str {
    "Birthday API is alive"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::util::ServiceExt;

    async fn setup_test_app() -> Router {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        create_router(AppState::new(db), "http://localhost:5173").unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, "Birthday API is alive");
    }

    #[tokio::test]
    async fn test_api_is_nested_and_cors_enabled() {
        let app = setup_test_app().await;

        let request = Request::builder()
            .uri("/api/birthdays")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn test_invalid_cors_origin() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        assert!(create_router(AppState::new(db), "bad\norigin").is_err());
    }
}
