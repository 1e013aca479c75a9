use crate::{
    client::{
        api::helper::{get, parse_response, query_string, send_request},
        model::error::ApiError,
    },
    model::member::MemberDto,
};

pub async fn get_members(role: String, city: String, q: String) -> Result<Vec<MemberDto>, ApiError> {
    let url = format!(
        "/api/members{}",
        query_string(&[("role", &role), ("city", &city), ("q", &q)])
    );
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_member(id: i32) -> Result<MemberDto, ApiError> {
    let url = format!("/api/members/{}", id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}
