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
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(integer(Profile::UserId).primary_key())
                    .col(string(Profile::Role).default("community"))
                    .col(text_null(Profile::Bio))
                    .col(string_null(Profile::Company))
                    .col(string_null(Profile::Title))
                    .col(string_null(Profile::City))
                    .col(string_null(Profile::LinkedinUrl))
                    .col(string_null(Profile::TwitterUrl))
                    .col(string_null(Profile::WebsiteUrl))
                    .col(boolean(Profile::IsVerified).default(false))
                    .col(boolean(Profile::IsPremium).default(false))
                    .col(boolean(Profile::IsApproved).default(false))
                    .col(text(Profile::Interests).default("[]"))
                    .col(text(Profile::LookingFor).default("[]"))
                    .col(timestamp_with_time_zone(Profile::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Profile::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_user_id")
                            .from(Profile::Table, Profile::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_profile_is_approved")
                    .table(Profile::Table)
                    .col(Profile::IsApproved)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    Table,
    UserId,
    Role,
    Bio,
    Company,
    Title,
    City,
    LinkedinUrl,
    TwitterUrl,
    WebsiteUrl,
    IsVerified,
    IsPremium,
    IsApproved,
    Interests,
    LookingFor,
    CreatedAt,
    UpdatedAt,
}
