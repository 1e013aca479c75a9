use crate::{
    client::{
        api::helper::{get, parse_response, post, query_string, send_request, serialize_json},
        model::error::ApiError,
    },
    model::forum::{
        CreateReplyDto, CreateThreadDto, CreatedThreadDto, ForumReplyDto, ForumThreadDetailDto,
        ForumThreadListDto,
    },
};

pub async fn get_threads(category: String, q: String) -> Result<ForumThreadListDto, ApiError> {
    let url = format!(
        "/api/forum{}",
        query_string(&[("category", &category), ("q", &q)])
    );
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_thread(slug: &str) -> Result<ForumThreadDetailDto, ApiError> {
    let url = format!("/api/forum/{}", slug);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_thread(payload: CreateThreadDto) -> Result<CreatedThreadDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/forum").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_reply(slug: &str, content: String) -> Result<ForumReplyDto, ApiError> {
    let payload = CreateReplyDto {
        content,
        parent_id: None,
    };
    let body = serialize_json(&payload)?;
    let url = format!("/api/forum/{}/replies", slug);
    let request = post(&url).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}
