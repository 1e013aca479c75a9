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
                    .table(Subscription::Table)
                    .if_not_exists()
                    .col(integer(Subscription::UserId).primary_key())
                    .col(string_null(Subscription::StripeSubscriptionId).unique_key())
                    .col(string_null(Subscription::StripePriceId))
                    .col(string(Subscription::Plan).default("free"))
                    .col(string(Subscription::Status).default("active"))
                    .col(timestamp_with_time_zone_null(Subscription::CurrentPeriodStart))
                    .col(timestamp_with_time_zone_null(Subscription::CurrentPeriodEnd))
                    .col(boolean(Subscription::CancelAtPeriodEnd).default(false))
                    .col(timestamp_with_time_zone(Subscription::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Subscription::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscription_user_id")
                            .from(Subscription::Table, Subscription::UserId)
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
            .drop_table(Table::drop().table(Subscription::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Subscription {
    Table,
    UserId,
    StripeSubscriptionId,
    StripePriceId,
    Plan,
    Status,
    CurrentPeriodStart,
    CurrentPeriodEnd,
    CancelAtPeriodEnd,
    CreatedAt,
    UpdatedAt,
}
