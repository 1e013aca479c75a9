use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_user_table::User, m20260101_000004_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventRsvp::Table)
                    .if_not_exists()
                    .col(pk_auto(EventRsvp::Id))
                    .col(integer(EventRsvp::EventId))
                    .col(integer(EventRsvp::UserId))
                    .col(string(EventRsvp::Status).default("registered"))
                    .col(text_null(EventRsvp::Notes))
                    .col(timestamp_with_time_zone(EventRsvp::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_rsvp_event_id")
                            .from(EventRsvp::Table, EventRsvp::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_rsvp_user_id")
                            .from(EventRsvp::Table, EventRsvp::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One RSVP per member per event
        manager
            .create_index(
                Index::create()
                    .name("idx_event_rsvp_event_user")
                    .table(EventRsvp::Table)
                    .col(EventRsvp::EventId)
                    .col(EventRsvp::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventRsvp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventRsvp {
    Table,
    Id,
    EventId,
    UserId,
    Status,
    Notes,
    CreatedAt,
}
