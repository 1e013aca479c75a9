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
                    .table(Startup::Table)
                    .if_not_exists()
                    .col(pk_auto(Startup::Id))
                    .col(integer(Startup::FounderId))
                    .col(string(Startup::Name))
                    .col(string_null(Startup::Tagline))
                    .col(text_null(Startup::Description))
                    .col(string_null(Startup::LogoUrl))
                    .col(string_null(Startup::WebsiteUrl))
                    .col(string(Startup::Stage).default("idea"))
                    .col(string_null(Startup::Sector))
                    .col(string_null(Startup::City))
                    .col(integer_null(Startup::TeamSize))
                    .col(string_null(Startup::FundingRaised))
                    .col(boolean(Startup::IsRaising).default(false))
                    .col(string_null(Startup::RaiseAmount))
                    .col(boolean(Startup::IsFeatured).default(false))
                    .col(timestamp_with_time_zone(Startup::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Startup::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_startup_founder_id")
                            .from(Startup::Table, Startup::FounderId)
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
            .drop_table(Table::drop().table(Startup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Startup {
    Table,
    Id,
    FounderId,
    Name,
    Tagline,
    Description,
    LogoUrl,
    WebsiteUrl,
    Stage,
    Sector,
    City,
    TeamSize,
    FundingRaised,
    IsRaising,
    RaiseAmount,
    IsFeatured,
    CreatedAt,
    UpdatedAt,
}
