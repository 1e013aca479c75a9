use crate::{
    client::{
        api::helper::{get, parse_response, post, query_string, send_request, serialize_json},
        model::error::ApiError,
    },
    model::job::{CreateJobDto, JobDto},
};

pub async fn get_jobs(
    job_type: String,
    location_type: String,
    city: String,
    q: String,
) -> Result<Vec<JobDto>, ApiError> {
    let url = format!(
        "/api/jobs{}",
        query_string(&[
            ("jobType", &job_type),
            ("locationType", &location_type),
            ("city", &city),
            ("q", &q),
        ])
    );
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_job(id: i32) -> Result<JobDto, ApiError> {
    let url = format!("/api/jobs/{}", id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_job(payload: CreateJobDto) -> Result<JobDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/jobs").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}
