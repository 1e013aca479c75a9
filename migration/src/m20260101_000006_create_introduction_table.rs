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
                    .table(Introduction::Table)
                    .if_not_exists()
                    .col(pk_auto(Introduction::Id))
                    .col(integer(Introduction::RequesterId))
                    .col(integer(Introduction::TargetId))
                    .col(integer_null(Introduction::ConnectorId))
                    .col(string(Introduction::Status).default("pending"))
                    .col(text_null(Introduction::Message))
                    .col(text_null(Introduction::Outcome))
                    .col(timestamp_with_time_zone(Introduction::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Introduction::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_introduction_requester_id")
                            .from(Introduction::Table, Introduction::RequesterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_introduction_target_id")
                            .from(Introduction::Table, Introduction::TargetId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_introduction_connector_id")
                            .from(Introduction::Table, Introduction::ConnectorId)
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
            .drop_table(Table::drop().table(Introduction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Introduction {
    Table,
    Id,
    RequesterId,
    TargetId,
    ConnectorId,
    Status,
    Message,
    Outcome,
    CreatedAt,
    UpdatedAt,
}
