use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        profile::{MyProfileDto, ProfileDto, UpsertProfileDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::profile::ProfileService,
        state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// Get the caller's account and profile.
///
/// # Access Control
/// - Signed-in user
///
/// # Returns
/// - `200 OK` - Account with the profile, which is `null` before onboarding
/// - `401 Unauthorized` - Not signed in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Caller's account and profile", body = MyProfileDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = ProfileService::new(&state.db).get_own(user.id).await?;

    let dto = MyProfileDto {
        user: user.into_dto(profile.as_ref()),
        profile: profile.map(|p| p.into_dto()),
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Create or update the caller's profile.
///
/// Used both by onboarding and the profile editor. Approval and verification
/// flags cannot be set here.
///
/// # Access Control
/// - Signed-in user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Profile fields
///
/// # Returns
/// - `200 OK` - Stored profile
/// - `401 Unauthorized` - Not signed in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/profile",
    tag = PROFILE_TAG,
    request_body = UpsertProfileDto,
    responses(
        (status = 200, description = "Stored profile", body = ProfileDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = ProfileService::new(&state.db).upsert(&user, payload).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}
