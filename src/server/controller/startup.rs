use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        startup::{CreateStartupDto, StartupDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::startup::StartupService,
        state::AppState,
    },
};

/// Tag for grouping startup endpoints in OpenAPI documentation
pub static STARTUP_TAG: &str = "startup";

/// List startups, featured first then newest.
#[utoipa::path(
    get,
    path = "/api/startups",
    tag = STARTUP_TAG,
    responses(
        (status = 200, description = "All startups", body = Vec<StartupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_startups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let startups = StartupService::new(&state.db).list().await?;

    let startups: Vec<StartupDto> = startups.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(startups)))
}

/// Register a startup owned by the caller.
///
/// # Access Control
/// - Signed-in user
///
/// # Returns
/// - `201 Created` - The registered startup
/// - `400 Bad Request` - Name missing
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/startups",
    tag = STARTUP_TAG,
    request_body = CreateStartupDto,
    responses(
        (status = 201, description = "Startup registered", body = StartupDto),
        (status = 400, description = "Startup name is required", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_startup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateStartupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let startup = StartupService::new(&state.db)
        .create(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(startup.into_dto())))
}
