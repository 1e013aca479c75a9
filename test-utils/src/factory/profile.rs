//! Profile factory for creating member profiles.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test profiles with customizable fields.
///
/// Profiles default to the `community` role and are unapproved, matching a
/// freshly onboarded member.
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    role: String,
    company: Option<String>,
    title: Option<String>,
    city: Option<String>,
    bio: Option<String>,
    is_approved: bool,
    is_verified: bool,
}

impl<'a> ProfileFactory<'a> {
    /// Creates a new ProfileFactory for the given user.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the user owning the profile
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            role: "community".to_string(),
            company: None,
            title: None,
            city: None,
            bio: None,
            is_approved: false,
            is_verified: false,
        }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn approved(mut self, approved: bool) -> Self {
        self.is_approved = approved;
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.is_verified = verified;
        self
    }

    /// Builds and inserts the profile entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::profile::Model)` - Created profile entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::profile::Model, DbErr> {
        let now = Utc::now();
        entity::profile::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            role: ActiveValue::Set(self.role),
            bio: ActiveValue::Set(self.bio),
            company: ActiveValue::Set(self.company),
            title: ActiveValue::Set(self.title),
            city: ActiveValue::Set(self.city),
            linkedin_url: ActiveValue::Set(None),
            twitter_url: ActiveValue::Set(None),
            website_url: ActiveValue::Set(None),
            is_verified: ActiveValue::Set(self.is_verified),
            is_premium: ActiveValue::Set(false),
            is_approved: ActiveValue::Set(self.is_approved),
            interests: ActiveValue::Set("[]".to_string()),
            looking_for: ActiveValue::Set("[]".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unapproved community profile for the given user.
pub async fn create_profile(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db, user_id).build().await
}
