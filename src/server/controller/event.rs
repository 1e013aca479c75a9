use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        event::{EventDto, RsvpResultDto, RsvpSummaryDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// List upcoming events.
///
/// Published events from the start of today (UTC), soonest first.
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Upcoming events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).upcoming().await?;

    let events: Vec<EventDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(events)))
}

/// Get an event by slug.
///
/// # Returns
/// - `200 OK` - Event detail
/// - `404 Not Found` - No event with this slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events/{slug}",
    tag = EVENT_TAG,
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    responses(
        (status = 200, description = "Event detail", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get_by_slug(&slug).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Register for an event.
///
/// Takes a seat while capacity remains, otherwise joins the waitlist.
///
/// # Access Control
/// - Signed-in user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `slug` - Event slug
///
/// # Returns
/// - `201 Created` - `registered` or `waitlist`
/// - `400 Bad Request` - Already registered
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No event with this slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/events/{slug}/rsvp",
    tag = EVENT_TAG,
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    responses(
        (status = 201, description = "RSVP stored", body = RsvpResultDto),
        (status = 400, description = "Already registered", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_rsvp(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let status = EventService::new(&state.db).rsvp(&slug, user.id).await?;

    Ok((StatusCode::CREATED, Json(RsvpResultDto { status })))
}

/// Withdraw from an event.
///
/// Frees the seat when the RSVP was registered. Succeeds when there was no RSVP.
///
/// # Access Control
/// - Signed-in user
#[utoipa::path(
    delete,
    path = "/api/events/{slug}/rsvp",
    tag = EVENT_TAG,
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    responses(
        (status = 200, description = "RSVP removed", body = SuccessDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_rsvp(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    EventService::new(&state.db).cancel_rsvp(&slug, user.id).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// Get RSVP counts for an event.
///
/// Public. `userStatus` is filled in when the caller is signed in and has an RSVP.
#[utoipa::path(
    get,
    path = "/api/events/{slug}/rsvp",
    tag = EVENT_TAG,
    params(
        ("slug" = String, Path, description = "Event slug")
    ),
    responses(
        (status = 200, description = "RSVP counts", body = RsvpSummaryDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rsvp_summary(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).optional().await?;

    let summary = EventService::new(&state.db)
        .summary(&slug, user.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
