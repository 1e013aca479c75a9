use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::startup::{CreateStartupDto, StartupDto},
};

pub async fn get_startups() -> Result<Vec<StartupDto>, ApiError> {
    let request = get("/api/startups");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_startup(payload: CreateStartupDto) -> Result<StartupDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/startups").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}
