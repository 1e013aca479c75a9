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
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Title))
                    .col(string_uniq(Event::Slug))
                    .col(text_null(Event::Description))
                    .col(text_null(Event::Content))
                    .col(string_null(Event::CoverImageUrl))
                    .col(timestamp_with_time_zone(Event::EventDate))
                    .col(string_null(Event::EventTime))
                    .col(string_null(Event::Location))
                    .col(string_null(Event::City))
                    .col(boolean(Event::IsVirtual).default(false))
                    .col(string_null(Event::VirtualLink))
                    .col(integer_null(Event::Capacity))
                    .col(integer(Event::RegisteredCount).default(0))
                    .col(boolean(Event::IsFeatured).default(false))
                    .col(boolean(Event::IsPublished).default(false))
                    .col(integer_null(Event::OrganizerId))
                    .col(text(Event::Tags).default("[]"))
                    .col(timestamp_with_time_zone(Event::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Event::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_organizer_id")
                            .from(Event::Table, Event::OrganizerId)
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
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Title,
    Slug,
    Description,
    Content,
    CoverImageUrl,
    EventDate,
    EventTime,
    Location,
    City,
    IsVirtual,
    VirtualLink,
    Capacity,
    RegisteredCount,
    IsFeatured,
    IsPublished,
    OrganizerId,
    Tags,
    CreatedAt,
    UpdatedAt,
}
