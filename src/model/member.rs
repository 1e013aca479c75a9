use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::enums::Role;

/// Public directory entry for an approved member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub id: i32,
    pub name: Option<String>,
    pub image: Option<String>,
    pub role: Role,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub city: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub website_url: Option<String>,
    pub is_verified: bool,
    pub is_premium: bool,
    pub interests: Vec<String>,
    pub looking_for: Vec<String>,
}
