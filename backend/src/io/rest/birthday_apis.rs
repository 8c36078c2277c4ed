//! # REST API for Birthday Management
//!
//! CRUD endpoints plus the ranked views: grouped by bucket and the birthdays
//! still to come this year.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::info;

use crate::domain::commands::birthdays::{BirthdayListQuery, GroupedBirthdaysQuery};
use crate::io::rest::errors::{domain_error_response, error_body, resolve_today};
use crate::io::rest::mappers::BirthdayMapper;
use crate::AppState;
use shared::{CreateBirthdayRequest, UpdateBirthdayRequest};

#[derive(Debug, Deserialize, Default)]
pub struct ListQuery {
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct GroupedQuery {
    pub today: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct TodayQuery {
    pub today: Option<String>,
}

/// Create a router for birthday APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/birthdays", get(list_birthdays).post(create_birthday))
        .route("/birthdays/grouped", get(list_grouped_birthdays))
        .route("/birthdays/upcoming", get(list_upcoming_birthdays))
        .route(
            "/birthdays/:id",
            get(get_birthday).put(update_birthday).delete(delete_birthday),
        )
}

/// List birthdays, optionally filtered by `search`
pub async fn list_birthdays(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    info!("GET /api/birthdays - query: {:?}", query);

    let query = BirthdayListQuery { search: query.search };
    match state.birthday_service.list_birthdays(query).await {
        Ok(birthdays) => (StatusCode::OK, Json(BirthdayMapper::to_list_dto(birthdays))).into_response(),
        Err(e) => domain_error_response("list birthdays", e),
    }
}

/// Create a new birthday
pub async fn create_birthday(
    State(state): State<AppState>,
    Json(request): Json<CreateBirthdayRequest>,
) -> impl IntoResponse {
    info!("POST /api/birthdays - request: {:?}", request);

    let command = BirthdayMapper::to_create_command(request);
    match state.birthday_service.create_birthday(command).await {
        Ok(result) => (StatusCode::CREATED, Json(BirthdayMapper::to_response_dto(result))).into_response(),
        Err(e) => domain_error_response("create birthday", e),
    }
}

/// Get a birthday by ID
pub async fn get_birthday(
    State(state): State<AppState>,
    Path(birthday_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/birthdays/{}", birthday_id);

    match state.birthday_service.get_birthday(&birthday_id).await {
        Ok(Some(birthday)) => (StatusCode::OK, Json(BirthdayMapper::to_dto(birthday))).into_response(),
        Ok(None) => error_body(
            StatusCode::NOT_FOUND,
            format!("Birthday not found: {}", birthday_id),
        ),
        Err(e) => domain_error_response("get birthday", e),
    }
}

/// Update a birthday
pub async fn update_birthday(
    State(state): State<AppState>,
    Path(birthday_id): Path<String>,
    Json(request): Json<UpdateBirthdayRequest>,
) -> impl IntoResponse {
    info!("PUT /api/birthdays/{} - request: {:?}", birthday_id, request);

    let command = BirthdayMapper::to_update_command(request);
    match state.birthday_service.update_birthday(&birthday_id, command).await {
        Ok(result) => (StatusCode::OK, Json(BirthdayMapper::to_response_dto(result))).into_response(),
        Err(e) => domain_error_response("update birthday", e),
    }
}

/// Delete a birthday
pub async fn delete_birthday(
    State(state): State<AppState>,
    Path(birthday_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/birthdays/{}", birthday_id);

    match state.birthday_service.delete_birthday(&birthday_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => domain_error_response("delete birthday", e),
    }
}

/// Birthdays ranked and split into This Week / Next Week / This Month /
/// Next Month / Later relative to `today`
pub async fn list_grouped_birthdays(
    State(state): State<AppState>,
    Query(query): Query<GroupedQuery>,
) -> impl IntoResponse {
    info!("GET /api/birthdays/grouped - query: {:?}", query);

    let today = match resolve_today(query.today.as_deref()) {
        Ok(today) => today,
        Err(response) => return response,
    };

    let query = GroupedBirthdaysQuery {
        today,
        search: query.search,
    };
    match state.birthday_service.list_grouped(query).await {
        Ok(result) => (StatusCode::OK, Json(BirthdayMapper::to_grouped_response_dto(result))).into_response(),
        Err(e) => domain_error_response("group birthdays", e),
    }
}

/// Birthdays still to come in the current year, nearest first
pub async fn list_upcoming_birthdays(
    State(state): State<AppState>,
    Query(query): Query<TodayQuery>,
) -> impl IntoResponse {
    info!("GET /api/birthdays/upcoming - query: {:?}", query);

    let today = match resolve_today(query.today.as_deref()) {
        Ok(today) => today,
        Err(response) => return response,
    };

    match state.birthday_service.list_upcoming(today).await {
        Ok(result) => (StatusCode::OK, Json(BirthdayMapper::to_upcoming_response_dto(result))).into_response(),
        Err(e) => domain_error_response("list upcoming birthdays", e),
    }
}
