use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        enums::{JobType, LocationType},
        job::{CreateJobDto, JobDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::job::JobFilter,
        service::job::JobService, state::AppState, util::parse::normalize_optional,
    },
};

/// Tag for grouping job board endpoints in OpenAPI documentation
pub static JOB_TAG: &str = "job";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobQuery {
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub location_type: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

impl JobQuery {
    fn into_filter(self) -> JobFilter {
        JobFilter {
            job_type: self.job_type.as_deref().and_then(JobType::parse),
            location_type: self.location_type.as_deref().and_then(LocationType::parse),
            city: normalize_optional(self.city),
            query: normalize_optional(self.q),
        }
    }
}

/// List open jobs.
///
/// Active listings that have not expired, featured first then newest.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional job type, location type, city and free text filters
///
/// # Returns
/// - `200 OK` - Matching jobs with their startup
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = JOB_TAG,
    params(
        ("jobType" = Option<String>, Query, description = "full-time, part-time, contract or internship"),
        ("locationType" = Option<String>, Query, description = "remote, hybrid or onsite"),
        ("city" = Option<String>, Query, description = "City substring, case-insensitive"),
        ("q" = Option<String>, Query, description = "Search over title, description and startup name")
    ),
    responses(
        (status = 200, description = "Open jobs", body = Vec<JobDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobQuery>,
) -> Result<impl IntoResponse, AppError> {
    let jobs = JobService::new(&state.db).list(&query.into_filter()).await?;

    let jobs: Vec<JobDto> = jobs.into_iter().map(|j| j.into_dto()).collect();

    Ok((StatusCode::OK, Json(jobs)))
}

/// Get an open job.
///
/// # Returns
/// - `200 OK` - Job detail
/// - `404 Not Found` - Missing, inactive or expired
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    tag = JOB_TAG,
    params(
        ("id" = i32, Path, description = "Job id")
    ),
    responses(
        (status = 200, description = "Job detail", body = JobDto),
        (status = 404, description = "Job not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let job = JobService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(job.into_dto())))
}

/// Post a job for the caller's startup.
///
/// # Access Control
/// - Signed-in user who has registered a startup
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Job fields
///
/// # Returns
/// - `201 Created` - The posted job, live for 30 days
/// - `400 Bad Request` - No startup, or title or description missing
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = JOB_TAG,
    request_body = CreateJobDto,
    responses(
        (status = 201, description = "Job posted", body = JobDto),
        (status = 400, description = "No startup or missing fields", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_job(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateJobDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let job = JobService::new(&state.db).create(user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(job.into_dto())))
}
