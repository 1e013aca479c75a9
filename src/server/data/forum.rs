//! Forum data repository for threads and replies.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::{
    model::enums::ForumCategory,
    server::{
        error::AppError,
        model::forum::{
            CreateReplyParam, CreateThreadParam, ForumReply, ForumThread, ThreadFilter,
        },
    },
};

/// Maximum number of threads returned by a list query.
const THREAD_LIST_LIMIT: u64 = 50;

/// Repository providing database operations for forum threads and replies.
pub struct ForumRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ForumRepository<'a> {
    /// Creates a new ForumRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ForumRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists up to 50 threads with their authors.
    ///
    /// Pinned threads come first, then the most recently replied to, then the newest.
    ///
    /// # Arguments
    /// - `filter` - Optional category and free-text filters
    ///
    /// # Returns
    /// - `Ok(Vec<ForumThread>)` - Matching threads
    /// - `Err(AppError)` - Database error or invalid stored category
    pub async fn get_threads(&self, filter: &ThreadFilter) -> Result<Vec<ForumThread>, AppError> {
        use entity::forum_thread::Column;

        let mut query = entity::prelude::ForumThread::find()
            .find_also_related(entity::prelude::User);

        if let Some(category) = filter.category {
            query = query.filter(Column::Category.eq(category.as_str()));
        }

        if let Some(text) = filter.query.as_deref().filter(|q| !q.trim().is_empty()) {
            let text = text.trim();
            query = query.filter(
                Condition::any()
                    .add(Column::Title.contains(text))
                    .add(Column::Content.contains(text)),
            );
        }

        let rows = query
            .order_by_desc(Column::IsPinned)
            .order_by_desc(Column::LastReplyAt)
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(THREAD_LIST_LIMIT)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(thread, author)| ForumThread::from_entity(thread, author))
            .collect()
    }

    /// Counts threads in every category, in declaration order.
    ///
    /// # Returns
    /// - `Ok(Vec<(ForumCategory, u64)>)` - One entry per category, including empty ones
    /// - `Err(AppError)` - Database error
    pub async fn count_by_category(&self) -> Result<Vec<(ForumCategory, u64)>, AppError> {
        let mut counts = Vec::with_capacity(ForumCategory::ALL.len());

        for category in ForumCategory::ALL {
            let count = entity::prelude::ForumThread::find()
                .filter(entity::forum_thread::Column::Category.eq(category.as_str()))
                .count(self.db)
                .await?;
            counts.push((*category, count));
        }

        Ok(counts)
    }

    /// Finds a thread by slug with its author.
    ///
    /// # Returns
    /// - `Ok(Some(ForumThread))` - Thread found
    /// - `Ok(None)` - No thread with that slug
    /// - `Err(AppError)` - Database error or invalid stored category
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<ForumThread>, AppError> {
        let row = entity::prelude::ForumThread::find()
            .filter(entity::forum_thread::Column::Slug.eq(slug))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        row.map(|(thread, author)| ForumThread::from_entity(thread, author))
            .transpose()
    }

    /// Increments a thread's view counter in place.
    pub async fn increment_view_count(&self, thread_id: i32) -> Result<(), AppError> {
        entity::prelude::ForumThread::update_many()
            .col_expr(
                entity::forum_thread::Column::ViewCount,
                Expr::cust("view_count + 1"),
            )
            .filter(entity::forum_thread::Column::Id.eq(thread_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Lists a thread's replies with their authors, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<ForumReply>)` - Replies in posting order
    /// - `Err(AppError)` - Database error
    pub async fn get_replies(&self, thread_id: i32) -> Result<Vec<ForumReply>, AppError> {
        let rows = entity::prelude::ForumReply::find()
            .filter(entity::forum_reply::Column::ThreadId.eq(thread_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::forum_reply::Column::CreatedAt)
            .order_by_asc(entity::forum_reply::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(reply, author)| ForumReply::from_entity(reply, author))
            .collect())
    }

    /// Stores a new thread.
    ///
    /// # Returns
    /// - `Ok((id, slug))` - Id and slug of the stored thread
    /// - `Err(AppError)` - Database error, including a duplicate slug
    pub async fn create_thread(&self, param: CreateThreadParam) -> Result<(i32, String), AppError> {
        let now = Utc::now();

        let entity = entity::forum_thread::ActiveModel {
            author_id: ActiveValue::Set(param.author_id),
            title: ActiveValue::Set(param.title),
            slug: ActiveValue::Set(param.slug),
            content: ActiveValue::Set(param.content),
            category: ActiveValue::Set(param.category.as_str().to_string()),
            is_pinned: ActiveValue::Set(false),
            is_locked: ActiveValue::Set(false),
            view_count: ActiveValue::Set(0),
            reply_count: ActiveValue::Set(0),
            last_reply_at: ActiveValue::Set(None),
            last_reply_by_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((entity.id, entity.slug))
    }

    /// Stores a reply and updates the thread's reply bookkeeping in one transaction.
    ///
    /// Bumps `reply_count` and records `last_reply_at` and `last_reply_by_id`.
    ///
    /// # Returns
    /// - `Ok(ForumReply)` - The stored reply with its author
    /// - `Err(AppError)` - Database error
    pub async fn create_reply(&self, param: CreateReplyParam) -> Result<ForumReply, AppError> {
        use entity::forum_thread::Column;

        let now = Utc::now();
        let txn = self.db.begin().await?;

        let reply = entity::forum_reply::ActiveModel {
            thread_id: ActiveValue::Set(param.thread_id),
            author_id: ActiveValue::Set(param.author_id),
            parent_id: ActiveValue::Set(param.parent_id),
            content: ActiveValue::Set(param.content),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::prelude::ForumThread::update_many()
            .col_expr(Column::ReplyCount, Expr::cust("reply_count + 1"))
            .col_expr(Column::LastReplyAt, Expr::value(now))
            .col_expr(Column::LastReplyById, Expr::value(param.author_id))
            .filter(Column::Id.eq(param.thread_id))
            .exec(&txn)
            .await?;

        let author = entity::prelude::User::find_by_id(param.author_id)
            .one(&txn)
            .await?;

        txn.commit().await?;

        Ok(ForumReply::from_entity(reply, author))
    }
}
