use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures talking to Stripe or validating its webhooks.
#[derive(Error, Debug)]
pub enum BillingError {
    /// `STRIPE_SECRET_KEY` is not set.
    #[error("Stripe is not configured")]
    NotConfigured,

    /// Stripe answered with a non-success status.
    #[error("Stripe API error ({status}): {message}")]
    Provider {
        status: u16,
        message: String,
    },

    /// The `Stripe-Signature` header is absent.
    #[error("Missing webhook signature")]
    MissingSignature,

    /// The signature header is malformed or no `v1` signature matches the payload.
    #[error("Invalid webhook signature")]
    InvalidSignature,

    /// The signed timestamp is outside the accepted tolerance window.
    #[error("Webhook timestamp outside tolerance ({age_secs}s)")]
    TimestampOutOfRange { age_secs: i64 },

    /// The verified body is not a Stripe event.
    #[error("Failed to parse webhook payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Converts billing errors into HTTP responses.
///
/// Webhook validation failures are 400 so Stripe does not retry them. Provider and
/// configuration failures are logged and reported as a generic 500.
impl IntoResponse for BillingError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingSignature => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Missing signature".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidSignature | Self::TimestampOutOfRange { .. } => {
                tracing::warn!("Rejected Stripe webhook: {}", self);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Invalid signature".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidPayload(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!("Invalid payload: {}", err),
                }),
            )
                .into_response(),
            err => {
                tracing::error!("{}", err);
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
