use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        admin::{AdminMemberDto, AdminSetupDto, SetupResultDto, UpdateMemberDto},
        api::{ErrorDto, SuccessDto},
        event::{CreateEventDto, EventDto},
        profile::ProfileDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{admin::AdminService, event::EventService},
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize)]
pub struct MigrateParams {
    #[serde(default)]
    pub secret: Option<String>,
}

/// List every user with their profile fields.
///
/// # Access Control
/// - `Admin` - Only admins can review members
///
/// # Returns
/// - `200 OK` - All users, newest first, with `hasProfile` set when onboarding is done
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/members",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All users with profile fields", body = Vec<AdminMemberDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let members = AdminService::new(&state.db).list_members().await?;

    let members: Vec<AdminMemberDto> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(members)))
}

/// Approve or verify a member.
///
/// Only the flags present in the body are written. Approving a member sends the
/// approval email; delivery failures are logged and do not fail the request.
///
/// # Access Control
/// - `Admin` - Only admins can moderate members
///
/// # Arguments
/// - `state` - Application state containing the database connection and email service
/// - `session` - User's session for authentication
/// - `payload` - Member id and flags to write
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - `memberId` missing
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `404 Not Found` - Member has no profile
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/admin/members",
    tag = ADMIN_TAG,
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Updated profile", body = ProfileDto),
        (status = 400, description = "Member ID required", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Member profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let profile = AdminService::new(&state.db)
        .update_member(payload, &state.email)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Promote the first admin.
///
/// Requires the configured setup secret instead of a session so the very first
/// admin can be created after signing in once.
///
/// # Returns
/// - `200 OK` - User promoted, profile approved and verified
/// - `400 Bad Request` - Email missing
/// - `403 Forbidden` - Wrong secret
/// - `404 Not Found` - No user with that email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/setup",
    tag = ADMIN_TAG,
    request_body = AdminSetupDto,
    responses(
        (status = 200, description = "User promoted to admin", body = SetupResultDto),
        (status = 400, description = "Email required", body = ErrorDto),
        (status = 403, description = "Invalid secret", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn setup(
    State(state): State<AppState>,
    Json(payload): Json<AdminSetupDto>,
) -> Result<impl IntoResponse, AppError> {
    let message = AdminService::new(&state.db)
        .setup(payload, &state.setup_secret)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SetupResultDto {
            success: true,
            message,
        }),
    ))
}

/// Run pending database migrations.
///
/// # Returns
/// - `200 OK` - Migrations applied
/// - `401 Unauthorized` - Wrong or missing secret
/// - `500 Internal Server Error` - Migration failed
#[utoipa::path(
    get,
    path = "/api/migrate",
    tag = ADMIN_TAG,
    params(
        ("secret" = String, Query, description = "Configured setup secret")
    ),
    responses(
        (status = 200, description = "Migrations applied", body = SetupResultDto),
        (status = 401, description = "Invalid secret", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn migrate(
    State(state): State<AppState>,
    Query(params): Query<MigrateParams>,
) -> Result<impl IntoResponse, AppError> {
    let applied = AdminService::new(&state.db)
        .migrate(params.secret.as_deref(), &state.setup_secret)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SetupResultDto {
            success: true,
            message: format!("Applied {} migrations", applied),
        }),
    ))
}

/// Drop the cached gallery so the next request refetches from Cloudinary.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/gallery/refresh",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Gallery cache cleared", body = SuccessDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
)]
pub async fn refresh_gallery(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    state.gallery.invalidate().await;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// Publish a new event.
///
/// The slug is derived from the title and the admin is recorded as organizer.
///
/// # Access Control
/// - `Admin` - Only admins can publish events
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Event details
///
/// # Returns
/// - `201 Created` - The published event
/// - `400 Bad Request` - Title missing
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/admin/events",
    tag = ADMIN_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event published", body = EventDto),
        (status = 400, description = "Title is required", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let event = EventService::new(&state.db).create(user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}
