//! Profile service for the caller's own profile and onboarding.

use sea_orm::DatabaseConnection;

use crate::{
    model::profile::UpsertProfileDto,
    server::{
        data::{profile::ProfileRepository, user::UserRepository},
        error::AppError,
        model::{
            profile::{Profile, UpsertProfileParam},
            user::User,
        },
        util::parse::normalize_optional,
    },
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    /// Creates a new ProfileService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ProfileService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the caller's profile, which is absent before onboarding.
    pub async fn get_own(&self, user_id: i32) -> Result<Option<Profile>, AppError> {
        ProfileRepository::new(self.db).find_by_user_id(user_id).await
    }

    /// Creates or updates the caller's profile.
    ///
    /// A non-blank `name` in the payload replaces the display name taken from Google.
    /// Approval and verification flags are never written here.
    ///
    /// # Arguments
    /// - `user` - The signed-in user
    /// - `dto` - Profile fields from the request body
    ///
    /// # Returns
    /// - `Ok(Profile)` - The stored profile
    /// - `Err(AppError)` - Database error
    pub async fn upsert(&self, user: &User, mut dto: UpsertProfileDto) -> Result<Profile, AppError> {
        if let Some(name) = normalize_optional(dto.name.take()) {
            if user.name.as_deref() != Some(name.as_str()) {
                UserRepository::new(self.db).set_name(user.id, &name).await?;
            }
        }

        ProfileRepository::new(self.db)
            .upsert(UpsertProfileParam::from_dto(user.id, dto))
            .await
    }
}
