pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_profile_table;
mod m20260101_000003_create_startup_table;
mod m20260101_000004_create_event_table;
mod m20260101_000005_create_event_rsvp_table;
mod m20260101_000006_create_introduction_table;
mod m20260101_000007_create_job_table;
mod m20260101_000008_create_forum_thread_table;
mod m20260101_000009_create_forum_reply_table;
mod m20260101_000010_create_subscription_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_profile_table::Migration),
            Box::new(m20260101_000003_create_startup_table::Migration),
            Box::new(m20260101_000004_create_event_table::Migration),
            Box::new(m20260101_000005_create_event_rsvp_table::Migration),
            Box::new(m20260101_000006_create_introduction_table::Migration),
            Box::new(m20260101_000007_create_job_table::Migration),
            Box::new(m20260101_000008_create_forum_thread_table::Migration),
            Box::new(m20260101_000009_create_forum_reply_table::Migration),
            Box::new(m20260101_000010_create_subscription_table::Migration),
        ]
    }
}
