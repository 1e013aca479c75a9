use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, enums::Role, member::MemberDto},
    server::{
        error::AppError, model::member::MemberFilter, service::member::MemberService,
        state::AppState, util::parse::normalize_optional,
    },
};

/// Tag for grouping directory endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

#[derive(Deserialize)]
pub struct MemberQuery {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

impl MemberQuery {
    /// Unknown roles are ignored rather than rejected.
    fn into_filter(self) -> MemberFilter {
        MemberFilter {
            role: self.role.as_deref().and_then(Role::parse),
            city: normalize_optional(self.city),
            query: normalize_optional(self.q),
        }
    }
}

/// List approved members.
///
/// Public directory. Verified members first, then by name.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional role, city and free text filters
///
/// # Returns
/// - `200 OK` - Matching members
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/members",
    tag = MEMBER_TAG,
    params(
        ("role" = Option<String>, Query, description = "Member role"),
        ("city" = Option<String>, Query, description = "City substring, case-insensitive"),
        ("q" = Option<String>, Query, description = "Search over name, company, title and bio")
    ),
    responses(
        (status = 200, description = "Approved members", body = Vec<MemberDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_members(
    State(state): State<AppState>,
    Query(query): Query<MemberQuery>,
) -> Result<impl IntoResponse, AppError> {
    let members = MemberService::new(&state.db)
        .list(&query.into_filter())
        .await?;

    let members: Vec<MemberDto> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(members)))
}

/// Get an approved member.
///
/// # Returns
/// - `200 OK` - Member detail
/// - `404 Not Found` - Unknown user, no profile, or not yet approved
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Member detail", body = MemberDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}
