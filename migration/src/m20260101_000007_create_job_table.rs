use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_user_table::User, m20260101_000003_create_startup_table::Startup,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(pk_auto(Job::Id))
                    .col(integer(Job::StartupId))
                    .col(integer(Job::PostedById))
                    .col(string(Job::Title))
                    .col(text(Job::Description))
                    .col(text_null(Job::Requirements))
                    .col(integer_null(Job::SalaryMin))
                    .col(integer_null(Job::SalaryMax))
                    .col(string(Job::SalaryCurrency).default("INR"))
                    .col(string(Job::JobType).default("full-time"))
                    .col(string(Job::LocationType).default("hybrid"))
                    .col(string_null(Job::City))
                    .col(string_null(Job::ApplyUrl))
                    .col(string_null(Job::ApplyEmail))
                    .col(text(Job::Skills).default("[]"))
                    .col(boolean(Job::IsActive).default(true))
                    .col(boolean(Job::IsFeatured).default(false))
                    .col(timestamp_with_time_zone_null(Job::ExpiresAt))
                    .col(timestamp_with_time_zone(Job::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone(Job::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_startup_id")
                            .from(Job::Table, Job::StartupId)
                            .to(Startup::Table, Startup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_posted_by_id")
                            .from(Job::Table, Job::PostedById)
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
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Job {
    Table,
    Id,
    StartupId,
    PostedById,
    Title,
    Description,
    Requirements,
    SalaryMin,
    SalaryMax,
    SalaryCurrency,
    JobType,
    LocationType,
    City,
    ApplyUrl,
    ApplyEmail,
    Skills,
    IsActive,
    IsFeatured,
    ExpiresAt,
    CreatedAt,
    UpdatedAt,
}
