use crate::{
    client::{
        api::helper::{get, parse_response, patch, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::introduction::{
        CreateIntroductionDto, IntroductionDto, IntroductionListDto, UpdateIntroductionDto,
    },
};

pub async fn request_introduction(
    target_id: i32,
    message: Option<String>,
) -> Result<IntroductionDto, ApiError> {
    let payload = CreateIntroductionDto {
        target_id: Some(target_id),
        message,
    };
    let body = serialize_json(&payload)?;
    let request = post("/api/introductions").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_introductions() -> Result<IntroductionListDto, ApiError> {
    let request = get("/api/introductions");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn respond_to_introduction(id: i32, status: &str) -> Result<IntroductionDto, ApiError> {
    let payload = UpdateIntroductionDto {
        status: Some(status.to_string()),
    };
    let body = serialize_json(&payload)?;
    let url = format!("/api/introductions/{}", id);
    let request = patch(&url).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}
