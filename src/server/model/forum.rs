//! Forum thread and reply domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        enums::ForumCategory,
        forum::{ForumAuthorDto, ForumReplyDto, ForumThreadSummaryDto},
    },
    server::{error::AppError, util::parse::parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ForumAuthor {
    pub id: i32,
    pub name: Option<String>,
    pub image: Option<String>,
}

impl ForumAuthor {
    /// Builds the author from the joined user row, falling back to a bare id when the
    /// join came back empty.
    pub fn from_entity(author_id: i32, user: Option<entity::user::Model>) -> Self {
        match user {
            Some(user) => Self {
                id: user.id,
                name: user.name,
                image: user.image,
            },
            None => Self {
                id: author_id,
                name: None,
                image: None,
            },
        }
    }

    pub fn into_dto(self) -> ForumAuthorDto {
        ForumAuthorDto {
            id: self.id,
            name: self.name,
            image: self.image,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForumThread {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub category: ForumCategory,
    pub is_pinned: bool,
    pub is_locked: bool,
    pub view_count: i32,
    pub reply_count: i32,
    pub last_reply_at: Option<DateTime<Utc>>,
    pub last_reply_by_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub author: ForumAuthor,
}

impl ForumThread {
    pub fn from_entity(
        entity: entity::forum_thread::Model,
        author: Option<entity::user::Model>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            content: entity.content,
            category: parse_stored(
                "forum_thread.category",
                entity.category,
                ForumCategory::parse,
            )?,
            is_pinned: entity.is_pinned,
            is_locked: entity.is_locked,
            view_count: entity.view_count,
            reply_count: entity.reply_count,
            last_reply_at: entity.last_reply_at,
            last_reply_by_id: entity.last_reply_by_id,
            created_at: entity.created_at,
            author: ForumAuthor::from_entity(entity.author_id, author),
        })
    }

    /// Splits the thread into its list summary and its body.
    pub fn into_dto(self) -> (ForumThreadSummaryDto, String) {
        (
            ForumThreadSummaryDto {
                id: self.id,
                title: self.title,
                slug: self.slug,
                category: self.category,
                is_pinned: self.is_pinned,
                is_locked: self.is_locked,
                view_count: self.view_count,
                reply_count: self.reply_count,
                last_reply_at: self.last_reply_at,
                created_at: self.created_at,
                author: self.author.into_dto(),
            },
            self.content,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForumReply {
    pub id: i32,
    pub thread_id: i32,
    pub parent_id: Option<i32>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: ForumAuthor,
}

impl ForumReply {
    pub fn from_entity(
        entity: entity::forum_reply::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            thread_id: entity.thread_id,
            parent_id: entity.parent_id,
            content: entity.content,
            created_at: entity.created_at,
            author: ForumAuthor::from_entity(entity.author_id, author),
        }
    }

    pub fn into_dto(self) -> ForumReplyDto {
        ForumReplyDto {
            id: self.id,
            content: self.content,
            parent_id: self.parent_id,
            created_at: self.created_at,
            author: self.author.into_dto(),
        }
    }
}

/// Thread list filters.
#[derive(Debug, Clone, Default)]
pub struct ThreadFilter {
    pub category: Option<ForumCategory>,
    /// Free text matched against title and content.
    pub query: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateThreadParam {
    pub author_id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub category: ForumCategory,
}

#[derive(Debug, Clone)]
pub struct CreateReplyParam {
    pub thread_id: i32,
    pub author_id: i32,
    pub parent_id: Option<i32>,
    pub content: String,
}
