use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        introduction::{
            CreateIntroductionDto, IntroductionDto, IntroductionListDto, UpdateIntroductionDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::introduction::{parse_response_status, IntroductionService},
        state::AppState,
    },
};

/// Tag for grouping introduction endpoints in OpenAPI documentation
pub static INTRODUCTION_TAG: &str = "introduction";

/// Request an introduction to another member.
///
/// # Access Control
/// - Signed-in user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Target user id and an optional message
///
/// # Returns
/// - `201 Created` - Pending introduction
/// - `400 Bad Request` - Missing target or the target is the caller
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Target user does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/introductions",
    tag = INTRODUCTION_TAG,
    request_body = CreateIntroductionDto,
    responses(
        (status = 201, description = "Introduction requested", body = IntroductionDto),
        (status = 400, description = "Missing or invalid target", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Target user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_introduction(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateIntroductionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let introduction = IntroductionService::new(&state.db)
        .create(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(introduction.into_dto())))
}

/// List the caller's received and sent introductions.
///
/// # Access Control
/// - Signed-in user
///
/// # Returns
/// - `200 OK` - Received and sent introductions, newest first
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/introductions",
    tag = INTRODUCTION_TAG,
    responses(
        (status = 200, description = "Caller's introductions", body = IntroductionListDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_introductions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let (received, sent) = IntroductionService::new(&state.db).list(user.id).await?;

    let dto = IntroductionListDto {
        received: received.into_iter().map(|i| i.into_dto()).collect(),
        sent: sent.into_iter().map(|i| i.into_dto()).collect(),
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Get an introduction.
///
/// # Access Control
/// - `IntroductionParticipant` - Only the requester or the target
///
/// # Returns
/// - `200 OK` - The introduction
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller is not part of the introduction
/// - `404 Not Found` - Introduction does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/introductions/{id}",
    tag = INTRODUCTION_TAG,
    params(
        ("id" = i32, Path, description = "Introduction id")
    ),
    responses(
        (status = 200, description = "The introduction", body = IntroductionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not part of the introduction", body = ErrorDto),
        (status = 404, description = "Introduction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_introduction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::IntroductionParticipant(id)])
        .await?;

    let introduction = IntroductionService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(introduction.into_dto())))
}

/// Respond to an introduction.
///
/// The status is validated after sign-in but before the introduction is looked
/// up, so an invalid value is reported even for a missing introduction.
///
/// # Access Control
/// - `IntroductionTarget` - Only the member the introduction was requested to
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `id` - Introduction id
/// - `payload` - New status: `accepted`, `declined` or `completed`
///
/// # Returns
/// - `200 OK` - Updated introduction
/// - `400 Bad Request` - Invalid status
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller is not the target
/// - `404 Not Found` - Introduction does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/introductions/{id}",
    tag = INTRODUCTION_TAG,
    params(
        ("id" = i32, Path, description = "Introduction id")
    ),
    request_body = UpdateIntroductionDto,
    responses(
        (status = 200, description = "Updated introduction", body = IntroductionDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not the target", body = ErrorDto),
        (status = 404, description = "Introduction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_introduction(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateIntroductionDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let _ = auth_guard.require(&[]).await?;

    let status = parse_response_status(payload.status.as_deref())?;

    let _ = auth_guard
        .require(&[Permission::IntroductionTarget(id)])
        .await?;

    let introduction = IntroductionService::new(&state.db)
        .update_status(id, status)
        .await?;

    Ok((StatusCode::OK, Json(introduction.into_dto())))
}
