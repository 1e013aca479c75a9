//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// emails, slugs, and names to prevent unique constraint collisions.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with an approved profile.
///
/// Requires the `User` and `Profile` tables.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, profile))` - Created user and approved profile
/// - `Err(DbErr)` - Database error during creation
pub async fn create_approved_member(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::profile::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let profile = crate::factory::profile::ProfileFactory::new(db, user.id)
        .approved(true)
        .build()
        .await?;

    Ok((user, profile))
}

/// Creates a founder user owning a startup.
///
/// Requires the `User` and `Startup` tables.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((founder, startup))` - Created founder and startup
/// - `Err(DbErr)` - Database error during creation
pub async fn create_founder_with_startup(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::startup::Model), DbErr> {
    let founder = crate::factory::user::create_user(db).await?;
    let startup = crate::factory::startup::create_startup(db, founder.id).await?;

    Ok((founder, startup))
}
