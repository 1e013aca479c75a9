use crate::{
    client::{
        api::helper::{get, parse_response, patch, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        admin::{AdminMemberDto, UpdateMemberDto},
        api::SuccessDto,
        event::{CreateEventDto, EventDto},
        profile::ProfileDto,
    },
};

pub async fn get_all_members() -> Result<Vec<AdminMemberDto>, ApiError> {
    let request = get("/api/admin/members");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_member(payload: UpdateMemberDto) -> Result<ProfileDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = patch("/api/admin/members").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_event(payload: CreateEventDto) -> Result<EventDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/admin/events").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn refresh_gallery() -> Result<SuccessDto, ApiError> {
    let request = post("/api/admin/gallery/refresh");
    let response = send_request(request).await?;
    parse_response(response).await
}
