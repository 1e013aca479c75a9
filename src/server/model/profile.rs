//! Member profile domain model and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        enums::Role,
        profile::{ProfileDto, UpsertProfileDto},
    },
    server::{
        error::AppError,
        util::parse::{normalize_optional, parse_stored, parse_string_list},
    },
};

/// Profile attached 1:1 to a user.
///
/// `is_approved` gates directory visibility and posting rights.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user_id: i32,
    pub role: Role,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub city: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub website_url: Option<String>,
    pub is_verified: bool,
    pub is_premium: bool,
    pub is_approved: bool,
    pub interests: Vec<String>,
    pub looking_for: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Converts an entity model to a profile domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The converted profile
    /// - `Err(AppError::InternalErr(_))` - Stored role or list column is invalid
    pub fn from_entity(entity: entity::profile::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: entity.user_id,
            role: parse_stored("profile.role", entity.role, Role::parse)?,
            bio: entity.bio,
            company: entity.company,
            title: entity.title,
            city: entity.city,
            linkedin_url: entity.linkedin_url,
            twitter_url: entity.twitter_url,
            website_url: entity.website_url,
            is_verified: entity.is_verified,
            is_premium: entity.is_premium,
            is_approved: entity.is_approved,
            interests: parse_string_list("profile.interests", &entity.interests)?,
            looking_for: parse_string_list("profile.looking_for", &entity.looking_for)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            user_id: self.user_id,
            role: self.role,
            bio: self.bio,
            company: self.company,
            title: self.title,
            city: self.city,
            linkedin_url: self.linkedin_url,
            twitter_url: self.twitter_url,
            website_url: self.website_url,
            is_verified: self.is_verified,
            is_premium: self.is_premium,
            is_approved: self.is_approved,
            interests: self.interests,
            looking_for: self.looking_for,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Member-editable profile fields.
///
/// Never carries approval or verification flags.
#[derive(Debug, Clone)]
pub struct UpsertProfileParam {
    pub user_id: i32,
    pub role: Role,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub city: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub website_url: Option<String>,
    pub interests: Vec<String>,
    pub looking_for: Vec<String>,
}

impl UpsertProfileParam {
    /// Builds parameters from the request body, trimming blank text fields to `None`.
    pub fn from_dto(user_id: i32, dto: UpsertProfileDto) -> Self {
        Self {
            user_id,
            role: dto.role,
            bio: normalize_optional(dto.bio),
            company: normalize_optional(dto.company),
            title: normalize_optional(dto.title),
            city: normalize_optional(dto.city),
            linkedin_url: normalize_optional(dto.linkedin_url),
            twitter_url: normalize_optional(dto.twitter_url),
            website_url: normalize_optional(dto.website_url),
            interests: dto.interests,
            looking_for: dto.looking_for,
        }
    }
}

/// Admin update of moderation flags. `None` leaves a flag unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileFlagsParam {
    pub user_id: i32,
    pub is_approved: Option<bool>,
    pub is_verified: Option<bool>,
}
