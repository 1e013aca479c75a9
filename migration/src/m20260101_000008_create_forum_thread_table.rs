use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ForumThread::Table)
                    .if_not_exists()
                    .col(pk_auto(ForumThread::Id))
                    .col(integer(ForumThread::AuthorId))
                    .col(string(ForumThread::Title))
                    .col(string_uniq(ForumThread::Slug))
                    .col(text(ForumThread::Content))
                    .col(string(ForumThread::Category).default("general"))
                    .col(boolean(ForumThread::IsPinned).default(false))
                    .col(boolean(ForumThread::IsLocked).default(false))
                    .col(integer(ForumThread::ViewCount).default(0))
                    .col(integer(ForumThread::ReplyCount).default(0))
                    .col(timestamp_with_time_zone_null(ForumThread::LastReplyAt))
                    .col(integer_null(ForumThread::LastReplyById))
                    .col(timestamp_with_time_zone(ForumThread::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(ForumThread::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forum_thread_author_id")
                            .from(ForumThread::Table, ForumThread::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forum_thread_last_reply_by_id")
                            .from(ForumThread::Table, ForumThread::LastReplyById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ForumThread::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ForumThread {
    Table,
    Id,
    AuthorId,
    Title,
    Slug,
    Content,
    Category,
    IsPinned,
    IsLocked,
    ViewCount,
    ReplyCount,
    LastReplyAt,
    LastReplyById,
    CreatedAt,
    UpdatedAt,
}
