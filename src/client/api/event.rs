use crate::{
    client::{
        api::helper::{delete, get, parse_response, post, send_request},
        model::error::ApiError,
    },
    model::{
        api::SuccessDto,
        event::{EventDto, RsvpResultDto, RsvpSummaryDto},
    },
};

pub async fn get_events() -> Result<Vec<EventDto>, ApiError> {
    let request = get("/api/events");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_event(slug: &str) -> Result<EventDto, ApiError> {
    let url = format!("/api/events/{}", slug);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_rsvp_summary(slug: &str) -> Result<RsvpSummaryDto, ApiError> {
    let url = format!("/api/events/{}/rsvp", slug);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn rsvp(slug: &str) -> Result<RsvpResultDto, ApiError> {
    let url = format!("/api/events/{}/rsvp", slug);
    let request = post(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn cancel_rsvp(slug: &str) -> Result<SuccessDto, ApiError> {
    let url = format!("/api/events/{}/rsvp", slug);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}
