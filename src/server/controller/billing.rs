use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        billing::{CheckoutRequestDto, RedirectUrlDto, SubscriptionDto, WebhookAckDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::billing::BillingService,
        state::AppState,
    },
};

/// Tag for grouping billing endpoints in OpenAPI documentation
pub static BILLING_TAG: &str = "billing";

const STRIPE_SIGNATURE_HEADER: &str = "stripe-signature";

/// Start a Stripe checkout for a paid plan.
///
/// # Access Control
/// - Signed-in user
///
/// # Arguments
/// - `state` - Application state with the HTTP client and Stripe settings
/// - `session` - User's session for authentication
/// - `payload` - Requested plan
///
/// # Returns
/// - `200 OK` - Hosted checkout URL
/// - `400 Bad Request` - Unknown plan or a plan without a price
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Stripe not configured or unavailable
#[utoipa::path(
    post,
    path = "/api/billing/checkout",
    tag = BILLING_TAG,
    request_body = CheckoutRequestDto,
    responses(
        (status = 200, description = "Checkout session created", body = RedirectUrlDto),
        (status = 400, description = "Invalid plan", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CheckoutRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let url = BillingService::new(&state.db, &state.http_client, &state.stripe, &state.app_url)
        .checkout(&user, &payload.plan)
        .await?;

    Ok((StatusCode::OK, Json(RedirectUrlDto { url })))
}

/// Open the Stripe billing portal.
///
/// # Access Control
/// - Signed-in user who has completed a checkout
///
/// # Returns
/// - `200 OK` - Portal URL
/// - `400 Bad Request` - No billing account found
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Stripe not configured or unavailable
#[utoipa::path(
    post,
    path = "/api/billing/portal",
    tag = BILLING_TAG,
    responses(
        (status = 200, description = "Portal session created", body = RedirectUrlDto),
        (status = 400, description = "No billing account found", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn portal(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let url = BillingService::new(&state.db, &state.http_client, &state.stripe, &state.app_url)
        .portal(&user)
        .await?;

    Ok((StatusCode::OK, Json(RedirectUrlDto { url })))
}

/// Get the caller's effective subscription.
///
/// # Access Control
/// - Signed-in user
#[utoipa::path(
    get,
    path = "/api/billing/subscription",
    tag = BILLING_TAG,
    responses(
        (status = 200, description = "Effective subscription", body = SubscriptionDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscription(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let subscription =
        BillingService::new(&state.db, &state.http_client, &state.stripe, &state.app_url)
            .subscription(user.id)
            .await?;

    Ok((StatusCode::OK, Json(subscription)))
}

/// Receive a Stripe webhook delivery.
///
/// The raw body is verified against the `Stripe-Signature` header before any
/// event is applied. Deliveries are acknowledged without processing when Stripe
/// is not configured.
///
/// # Returns
/// - `200 OK` - Delivery accepted
/// - `400 Bad Request` - Missing, malformed, stale or forged signature
/// - `500 Internal Server Error` - Applying the event failed; Stripe will retry
#[utoipa::path(
    post,
    path = "/api/webhooks/stripe",
    tag = BILLING_TAG,
    request_body(content = String, description = "Raw Stripe event JSON", content_type = "application/json"),
    params(
        ("Stripe-Signature" = String, Header, description = "Stripe signature header")
    ),
    responses(
        (status = 200, description = "Delivery accepted", body = WebhookAckDto),
        (status = 400, description = "Invalid signature", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let signature = headers
        .get(STRIPE_SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    BillingService::new(&state.db, &state.http_client, &state.stripe, &state.app_url)
        .handle_webhook(&body, signature, Utc::now().timestamp())
        .await?;

    Ok((StatusCode::OK, Json(WebhookAckDto { received: true })))
}
