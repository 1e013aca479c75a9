use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::billing::{CheckoutRequestDto, RedirectUrlDto, SubscriptionDto},
};

pub async fn start_checkout(plan: &str) -> Result<RedirectUrlDto, ApiError> {
    let payload = CheckoutRequestDto {
        plan: plan.to_string(),
    };
    let body = serialize_json(&payload)?;
    let request = post("/api/billing/checkout").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn open_portal() -> Result<RedirectUrlDto, ApiError> {
    let request = post("/api/billing/portal");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_subscription() -> Result<SubscriptionDto, ApiError> {
    let request = get("/api/billing/subscription");
    let response = send_request(request).await?;
    parse_response(response).await
}
