use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::enums::ForumCategory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ForumAuthorDto {
    pub id: i32,
    pub name: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ForumThreadSummaryDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub category: ForumCategory,
    pub is_pinned: bool,
    pub is_locked: bool,
    pub view_count: i32,
    pub reply_count: i32,
    pub last_reply_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub author: ForumAuthorDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CategoryCountDto {
    pub category: ForumCategory,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ForumThreadListDto {
    pub threads: Vec<ForumThreadSummaryDto>,
    pub category_counts: Vec<CategoryCountDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ForumReplyDto {
    pub id: i32,
    pub content: String,
    pub parent_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub author: ForumAuthorDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ForumThreadDetailDto {
    pub thread: ForumThreadSummaryDto,
    pub content: String,
    pub replies: Vec<ForumReplyDto>,
}

/// New thread form. Unknown categories are filed under `general`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateThreadDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreatedThreadDto {
    pub id: i32,
    pub slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateReplyDto {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub parent_id: Option<i32>,
}
