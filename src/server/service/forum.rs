//! Forum threads and replies.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        enums::ForumCategory,
        forum::{CreateReplyDto, CreateThreadDto},
    },
    server::{
        data::forum::ForumRepository,
        error::AppError,
        model::forum::{CreateReplyParam, CreateThreadParam, ForumReply, ForumThread, ThreadFilter},
        util::slug::thread_slug,
    },
};

pub struct ForumService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ForumService<'a> {
    /// Creates a new ForumService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ForumService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists threads matching the filter together with per-category thread counts.
    pub async fn list(
        &self,
        filter: &ThreadFilter,
    ) -> Result<(Vec<ForumThread>, Vec<(ForumCategory, u64)>), AppError> {
        let repo = ForumRepository::new(self.db);

        let threads = repo.get_threads(filter).await?;
        let counts = repo.count_by_category().await?;

        Ok((threads, counts))
    }

    /// Gets a thread with its replies and records the view.
    ///
    /// # Returns
    /// - `Ok((ForumThread, Vec<ForumReply>))` - Thread as viewed, replies oldest first
    /// - `Err(AppError::NotFound)` - No thread has this slug
    /// - `Err(AppError)` - Database error
    pub async fn detail(&self, slug: &str) -> Result<(ForumThread, Vec<ForumReply>), AppError> {
        let repo = ForumRepository::new(self.db);

        let mut thread = repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Thread not found".to_string()))?;

        repo.increment_view_count(thread.id).await?;
        thread.view_count += 1;

        let replies = repo.get_replies(thread.id).await?;

        Ok((thread, replies))
    }

    /// Starts a thread. Unknown or missing categories are filed under `general`.
    ///
    /// # Arguments
    /// - `author_id` - The approved member posting
    /// - `dto` - Title, content and optional category
    ///
    /// # Returns
    /// - `Ok((i32, String))` - Id and slug of the new thread
    /// - `Err(AppError::BadRequest)` - Blank title or content
    /// - `Err(AppError)` - Database error
    pub async fn create_thread(
        &self,
        author_id: i32,
        dto: CreateThreadDto,
    ) -> Result<(i32, String), AppError> {
        let title = dto.title.trim().to_string();
        let content = dto.content.trim().to_string();

        if title.is_empty() || content.is_empty() {
            return Err(AppError::BadRequest(
                "Title and content are required".to_string(),
            ));
        }

        let category = dto
            .category
            .as_deref()
            .and_then(ForumCategory::parse)
            .unwrap_or_default();

        let slug = thread_slug(&title, Utc::now());

        ForumRepository::new(self.db)
            .create_thread(CreateThreadParam {
                author_id,
                title,
                slug,
                content,
                category,
            })
            .await
    }

    /// Replies to a thread.
    ///
    /// # Returns
    /// - `Ok(ForumReply)` - The stored reply with its author
    /// - `Err(AppError::BadRequest)` - Blank content
    /// - `Err(AppError::NotFound)` - No thread has this slug
    /// - `Err(AppError::Forbidden)` - The thread is locked
    /// - `Err(AppError)` - Database error
    pub async fn create_reply(
        &self,
        author_id: i32,
        slug: &str,
        dto: CreateReplyDto,
    ) -> Result<ForumReply, AppError> {
        let content = dto.content.trim().to_string();
        if content.is_empty() {
            return Err(AppError::BadRequest("Content is required".to_string()));
        }

        let repo = ForumRepository::new(self.db);

        let thread = repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Thread not found".to_string()))?;

        if thread.is_locked {
            return Err(AppError::Forbidden("Thread is locked".to_string()));
        }

        repo.create_reply(CreateReplyParam {
            thread_id: thread.id,
            author_id,
            parent_id: dto.parent_id,
            content,
        })
        .await
    }
}
