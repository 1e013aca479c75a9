//! Forum thread factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test forum threads.
pub struct ForumThreadFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    slug: String,
    category: String,
    is_pinned: bool,
    is_locked: bool,
}

impl<'a> ForumThreadFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Thread {}", id),
            slug: format!("thread-{}", id),
            category: "general".to_string(),
            is_pinned: false,
            is_locked: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn pinned(mut self, pinned: bool) -> Self {
        self.is_pinned = pinned;
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.is_locked = locked;
        self
    }

    /// Builds and inserts the thread entity into the database.
    pub async fn build(self) -> Result<entity::forum_thread::Model, DbErr> {
        let now = Utc::now();
        entity::forum_thread::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            content: ActiveValue::Set("Thread body".to_string()),
            category: ActiveValue::Set(self.category),
            is_pinned: ActiveValue::Set(self.is_pinned),
            is_locked: ActiveValue::Set(self.is_locked),
            view_count: ActiveValue::Set(0),
            reply_count: ActiveValue::Set(0),
            last_reply_at: ActiveValue::Set(None),
            last_reply_by_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unlocked `general` thread for the given author.
pub async fn create_thread(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::forum_thread::Model, DbErr> {
    ForumThreadFactory::new(db, author_id).build().await
}
