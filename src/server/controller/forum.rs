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
        enums::ForumCategory,
        forum::{
            CategoryCountDto, CreateReplyDto, CreateThreadDto, CreatedThreadDto,
            ForumReplyDto, ForumThreadDetailDto, ForumThreadListDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::forum::ThreadFilter,
        service::forum::ForumService,
        state::AppState,
        util::parse::normalize_optional,
    },
};

/// Tag for grouping forum endpoints in OpenAPI documentation
pub static FORUM_TAG: &str = "forum";

#[derive(Deserialize)]
pub struct ThreadQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

/// List forum threads.
///
/// Up to 50 threads, pinned first, then by latest activity. Includes the thread
/// count of every category regardless of the filter.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional category and free text filters
///
/// # Returns
/// - `200 OK` - Threads and category counts
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/forum",
    tag = FORUM_TAG,
    params(
        ("category" = Option<String>, Query, description = "Forum category"),
        ("q" = Option<String>, Query, description = "Search over title and content")
    ),
    responses(
        (status = 200, description = "Threads and category counts", body = ForumThreadListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_threads(
    State(state): State<AppState>,
    Query(query): Query<ThreadQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = ThreadFilter {
        category: query.category.as_deref().and_then(ForumCategory::parse),
        query: normalize_optional(query.q),
    };

    let (threads, counts) = ForumService::new(&state.db).list(&filter).await?;

    let dto = ForumThreadListDto {
        threads: threads.into_iter().map(|t| t.into_dto().0).collect(),
        category_counts: counts
            .into_iter()
            .map(|(category, count)| CategoryCountDto { category, count })
            .collect(),
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Read a thread.
///
/// Counts as a view.
///
/// # Returns
/// - `200 OK` - Thread with replies, oldest first
/// - `404 Not Found` - No thread with this slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/forum/{slug}",
    tag = FORUM_TAG,
    params(
        ("slug" = String, Path, description = "Thread slug")
    ),
    responses(
        (status = 200, description = "Thread with replies", body = ForumThreadDetailDto),
        (status = 404, description = "Thread not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_thread(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (thread, replies) = ForumService::new(&state.db).detail(&slug).await?;

    let (thread, content) = thread.into_dto();

    let dto = ForumThreadDetailDto {
        thread,
        content,
        replies: replies.into_iter().map(|r| r.into_dto()).collect(),
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Start a thread.
///
/// # Access Control
/// - `ApprovedMember` - Only members with an approved profile can post
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Title, content and category
///
/// # Returns
/// - `201 Created` - Id and slug of the new thread
/// - `400 Bad Request` - Title or content missing
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Profile missing or not approved
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/forum",
    tag = FORUM_TAG,
    request_body = CreateThreadDto,
    responses(
        (status = 201, description = "Thread created", body = CreatedThreadDto),
        (status = 400, description = "Title and content are required", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Profile not approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_thread(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateThreadDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ApprovedMember])
        .await?;

    let (id, slug) = ForumService::new(&state.db)
        .create_thread(user.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedThreadDto { id, slug })))
}

/// Reply to a thread.
///
/// # Access Control
/// - `ApprovedMember` - Only members with an approved profile can post
///
/// # Returns
/// - `201 Created` - The reply
/// - `400 Bad Request` - Content missing
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Profile not approved, or the thread is locked
/// - `404 Not Found` - No thread with this slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/forum/{slug}/replies",
    tag = FORUM_TAG,
    params(
        ("slug" = String, Path, description = "Thread slug")
    ),
    request_body = CreateReplyDto,
    responses(
        (status = 201, description = "Reply posted", body = ForumReplyDto),
        (status = 400, description = "Content is required", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Profile not approved or thread locked", body = ErrorDto),
        (status = 404, description = "Thread not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reply(
    State(state): State<AppState>,
    session: Session,
    Path(slug): Path<String>,
    Json(payload): Json<CreateReplyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ApprovedMember])
        .await?;

    let reply = ForumService::new(&state.db)
        .create_reply(user.id, &slug, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(reply.into_dto())))
}
