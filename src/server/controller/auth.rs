use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession},
        },
        service::{auth::AuthService, profile::ProfileService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Google for token exchange.
    pub code: String,
}

/// Start Google sign-in.
///
/// Stores a fresh CSRF token in the session and redirects the browser to Google.
///
/// # Returns
/// - `307 Temporary Redirect` - To the Google consent screen
/// - `500 Internal Server Error` - Session store failure
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Google sign-in"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.google_userinfo_url,
    );

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Complete Google sign-in.
///
/// Validates the CSRF state, exchanges the code, upserts the user by email and
/// stores the user id in the session. New members are sent to onboarding.
///
/// # Arguments
/// - `state` - Application state with the OAuth client
/// - `session` - Session holding the CSRF token
/// - `params` - `state` and `code` returned by Google
///
/// # Returns
/// - `307 Temporary Redirect` - To `/onboarding` without a profile, `/dashboard` otherwise
/// - `400 Bad Request` - CSRF state mismatch
/// - `403 Forbidden` - Google did not verify the account's email
/// - `500 Internal Server Error` - Token exchange, Google or database failure
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state issued at login"),
        ("code" = String, Query, description = "Authorization code from Google")
    ),
    responses(
        (status = 307, description = "Signed in, redirect to onboarding or dashboard"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 403, description = "Unverified Google email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.state).await?;

    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.google_userinfo_url,
    );

    let user = auth_service.callback(params.code).await?;

    session.cycle_id().await?;
    AuthSession::new(&session).set_user_id(user.id).await?;

    let profile = ProfileService::new(&state.db).get_own(user.id).await?;

    let destination = if profile.is_some() {
        "/dashboard"
    } else {
        "/onboarding"
    };

    Ok(Redirect::temporary(destination))
}

/// Sign out.
///
/// Clears the session and redirects to the home page.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cleared, redirect to home")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Redirect::temporary("/"))
}

/// Get the signed-in user.
///
/// # Returns
/// - `200 OK` - The user with onboarding and approval flags
/// - `404 Not Found` - No user is signed in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed-in user", body = UserDto),
        (status = 404, description = "No user signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user) = AuthGuard::new(&state.db, &session).optional().await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    let profile = ProfileService::new(&state.db).get_own(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto(profile.as_ref()))))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
