//! # REST API Interface Layer
//!
//! HTTP endpoints for the birthday tracker. Handlers translate JSON DTOs from
//! the `shared` crate into domain commands, call the services held in
//! [`AppState`](crate::AppState), and map domain errors to status codes.
//!
//! Every router here uses paths relative to `/api`.

pub mod birthday_apis;
pub mod errors;
pub mod export_apis;
pub mod import_apis;
pub mod mappers;
pub mod reminder_apis;

use axum::Router;

use crate::AppState;

/// All API routes, ready to be nested under `/api`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(birthday_apis::router())
        .merge(import_apis::router())
        .merge(export_apis::router())
        .merge(reminder_apis::router())
}
