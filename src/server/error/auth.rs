use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use oauth2::{basic::BasicErrorResponseType, HttpClientError, RequestTokenError, StandardErrorResponse};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The request did not come from a signed-in browser. Results in a 401 Unauthorized
    /// response.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session refers to a user row that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user is signed in but lacks the permission required for the resource.
    ///
    /// The message is logged for diagnostics and a generic 403 Forbidden is returned.
    ///
    /// # Fields
    /// - Id of the user who was denied
    /// - Reason for the denial
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Google did not confirm ownership of the account's email address.
    ///
    /// Users are keyed by email, so an unverified address is never signed in.
    /// Results in a 403 Forbidden response.
    #[error("Google email {0} is not verified")]
    UnverifiedEmail(String),

    /// A shared operator secret in the request did not match configuration.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid operator secret")]
    InvalidSecret,

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code with Google failed.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error(transparent)]
    RequestTokenErr(
        #[from]
        RequestTokenError<
            HttpClientError<reqwest::Error>,
            StandardErrorResponse<BasicErrorResponseType>,
        >,
    ),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidSecret` → 401 Unauthorized with
///   "Unauthorized"
/// - `AccessDenied` / `UnverifiedEmail` → 403 Forbidden with "Forbidden"
/// - `CsrfValidationFailed` → 400 Bad Request with "There was an issue logging you in"
/// - `RequestTokenErr` → 500 Internal Server Error with generic message
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::InvalidSecret => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Unauthorized".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) | Self::UnverifiedEmail(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Forbidden".to_string(),
                }),
            )
                .into_response(),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::RequestTokenErr(err) => {
                tracing::error!("OAuth token exchange failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
