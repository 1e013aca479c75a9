use crate::{
    client::{
        api::helper::{get, parse_optional_response, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        profile::{MyProfileDto, ProfileDto, UpsertProfileDto},
        user::UserDto,
    },
};

/// Fetches the signed-in user, `None` when nobody is signed in.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let request = get("/api/auth/user");
    let response = send_request(request).await?;
    parse_optional_response(response).await
}

pub async fn get_profile() -> Result<MyProfileDto, ApiError> {
    let request = get("/api/profile");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn save_profile(payload: UpsertProfileDto) -> Result<ProfileDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/profile").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}
