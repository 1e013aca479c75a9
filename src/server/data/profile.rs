//! Profile data repository.
//!
//! Provides the `ProfileRepository` for member profiles and the public directory
//! queries built on top of them. Only approved profiles are ever returned by the
//! directory methods.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        member::{Member, MemberFilter},
        profile::{Profile, UpdateProfileFlagsParam, UpsertProfileParam},
        user::User,
    },
    util::parse::encode_string_list,
};

/// Repository providing database operations for member profiles.
pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileRepository<'a> {
    /// Creates a new ProfileRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ProfileRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the profile owned by a user.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - The user has onboarded
    /// - `Ok(None)` - No profile exists yet
    /// - `Err(AppError)` - Database error or invalid stored value
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Profile>, AppError> {
        let entity = entity::prelude::Profile::find_by_id(user_id)
            .one(self.db)
            .await?;

        entity.map(Profile::from_entity).transpose()
    }

    /// Creates or updates the member-editable fields of a profile.
    ///
    /// New profiles start unapproved, unverified and non-premium. On conflict only the
    /// editable columns are overwritten, so moderation flags survive edits.
    ///
    /// # Arguments
    /// - `param` - Editable profile fields
    ///
    /// # Returns
    /// - `Ok(Profile)` - The stored profile
    /// - `Err(AppError)` - Database error or invalid stored value
    pub async fn upsert(&self, param: UpsertProfileParam) -> Result<Profile, AppError> {
        use entity::profile::Column;

        let now = Utc::now();

        let entity = entity::prelude::Profile::insert(entity::profile::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            bio: ActiveValue::Set(param.bio),
            company: ActiveValue::Set(param.company),
            title: ActiveValue::Set(param.title),
            city: ActiveValue::Set(param.city),
            linkedin_url: ActiveValue::Set(param.linkedin_url),
            twitter_url: ActiveValue::Set(param.twitter_url),
            website_url: ActiveValue::Set(param.website_url),
            is_verified: ActiveValue::Set(false),
            is_premium: ActiveValue::Set(false),
            is_approved: ActiveValue::Set(false),
            interests: ActiveValue::Set(encode_string_list(&param.interests)),
            looking_for: ActiveValue::Set(encode_string_list(&param.looking_for)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(Column::UserId)
                .update_columns([
                    Column::Role,
                    Column::Bio,
                    Column::Company,
                    Column::Title,
                    Column::City,
                    Column::LinkedinUrl,
                    Column::TwitterUrl,
                    Column::WebsiteUrl,
                    Column::Interests,
                    Column::LookingFor,
                    Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Profile::from_entity(entity)
    }

    /// Writes the moderation flags that are present in `param`.
    ///
    /// # Returns
    /// - `Ok(Some((before, after)))` - Profile state before and after the update
    /// - `Ok(None)` - The user has no profile
    /// - `Err(AppError)` - Database error or invalid stored value
    pub async fn update_flags(
        &self,
        param: UpdateProfileFlagsParam,
    ) -> Result<Option<(Profile, Profile)>, AppError> {
        let Some(entity) = entity::prelude::Profile::find_by_id(param.user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let before = Profile::from_entity(entity.clone())?;

        let mut active: entity::profile::ActiveModel = entity.into();
        if let Some(is_approved) = param.is_approved {
            active.is_approved = ActiveValue::Set(is_approved);
        }
        if let Some(is_verified) = param.is_verified {
            active.is_verified = ActiveValue::Set(is_verified);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some((before, Profile::from_entity(updated)?)))
    }

    /// Approves and verifies a user's profile, creating a default one if needed.
    ///
    /// Used by the one-time admin setup.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The approved profile
    /// - `Err(AppError)` - Database error or invalid stored value
    pub async fn approve_and_verify(&self, user_id: i32) -> Result<Profile, AppError> {
        use entity::profile::Column;

        let now = Utc::now();

        let entity = entity::prelude::Profile::insert(entity::profile::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set("community".to_string()),
            bio: ActiveValue::Set(None),
            company: ActiveValue::Set(None),
            title: ActiveValue::Set(None),
            city: ActiveValue::Set(None),
            linkedin_url: ActiveValue::Set(None),
            twitter_url: ActiveValue::Set(None),
            website_url: ActiveValue::Set(None),
            is_verified: ActiveValue::Set(true),
            is_premium: ActiveValue::Set(false),
            is_approved: ActiveValue::Set(true),
            interests: ActiveValue::Set("[]".to_string()),
            looking_for: ActiveValue::Set("[]".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(Column::UserId)
                .update_columns([Column::IsApproved, Column::IsVerified, Column::UpdatedAt])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Profile::from_entity(entity)
    }

    /// Lists approved members matching the directory filters.
    ///
    /// Verified members come first, then members are ordered by name.
    ///
    /// # Arguments
    /// - `filter` - Optional role, city and free-text filters
    ///
    /// # Returns
    /// - `Ok(Vec<Member>)` - Approved members matching every filter
    /// - `Err(AppError)` - Database error or invalid stored value
    pub async fn find_approved(&self, filter: &MemberFilter) -> Result<Vec<Member>, AppError> {
        use entity::profile::Column;

        let mut query = entity::prelude::Profile::find()
            .find_also_related(entity::prelude::User)
            .filter(Column::IsApproved.eq(true));

        if let Some(role) = filter.role {
            query = query.filter(Column::Role.eq(role.as_str()));
        }

        if let Some(city) = filter.city.as_deref().filter(|c| !c.trim().is_empty()) {
            query = query.filter(Column::City.contains(city.trim()));
        }

        if let Some(text) = filter.query.as_deref().filter(|q| !q.trim().is_empty()) {
            let text = text.trim();
            query = query.filter(
                Condition::any()
                    .add(entity::user::Column::Name.contains(text))
                    .add(Column::Company.contains(text))
                    .add(Column::Title.contains(text))
                    .add(Column::Bio.contains(text)),
            );
        }

        let rows = query
            .order_by_desc(Column::IsVerified)
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?;

        let mut members = Vec::with_capacity(rows.len());
        for (profile, user) in rows {
            if let Some(user) = user {
                members.push(Member {
                    user: User::from_entity(user),
                    profile: Profile::from_entity(profile)?,
                });
            }
        }

        Ok(members)
    }

    /// Finds a single approved member.
    ///
    /// # Returns
    /// - `Ok(Some(Member))` - The user exists and their profile is approved
    /// - `Ok(None)` - Missing user, missing profile, or profile not approved
    /// - `Err(AppError)` - Database error or invalid stored value
    pub async fn find_approved_member(&self, user_id: i32) -> Result<Option<Member>, AppError> {
        let row = entity::prelude::Profile::find_by_id(user_id)
            .find_also_related(entity::prelude::User)
            .filter(entity::profile::Column::IsApproved.eq(true))
            .one(self.db)
            .await?;

        match row {
            Some((profile, Some(user))) => Ok(Some(Member {
                user: User::from_entity(user),
                profile: Profile::from_entity(profile)?,
            })),
            _ => Ok(None),
        }
    }
}
