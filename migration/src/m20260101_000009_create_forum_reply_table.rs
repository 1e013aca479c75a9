use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_user_table::User,
    m20260101_000008_create_forum_thread_table::ForumThread,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ForumReply::Table)
                    .if_not_exists()
                    .col(pk_auto(ForumReply::Id))
                    .col(integer(ForumReply::ThreadId))
                    .col(integer(ForumReply::AuthorId))
                    .col(integer_null(ForumReply::ParentId))
                    .col(text(ForumReply::Content))
                    .col(timestamp_with_time_zone(ForumReply::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(ForumReply::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forum_reply_thread_id")
                            .from(ForumReply::Table, ForumReply::ThreadId)
                            .to(ForumThread::Table, ForumThread::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_forum_reply_author_id")
                            .from(ForumReply::Table, ForumReply::AuthorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ForumReply::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ForumReply {
    Table,
    Id,
    ThreadId,
    AuthorId,
    ParentId,
    Content,
    CreatedAt,
    UpdatedAt,
}
