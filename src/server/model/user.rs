//! User domain models and parameters.
//!
//! Users are created on first Google sign-in and keyed by email. Profile data lives in
//! its own table and is loaded separately.

use chrono::{DateTime, Utc};

use crate::{model::user::UserDto, server::model::profile::Profile};

/// Account created from a Google identity.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub is_admin: bool,
    /// Stripe customer linked by the first completed checkout.
    pub stripe_customer_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Arguments
    /// - `profile` - The user's profile, if onboarding has created one
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self, profile: Option<&Profile>) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            image: self.image,
            is_admin: self.is_admin,
            has_profile: profile.is_some(),
            is_approved: profile.map(|profile| profile.is_approved).unwrap_or(false),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            image: entity.image,
            is_admin: entity.is_admin,
            stripe_customer_id: entity.stripe_customer_id,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for upserting a user during Google sign-in.
///
/// The email is the conflict key; name and image are refreshed on every login.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
}
