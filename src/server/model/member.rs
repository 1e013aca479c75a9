//! Directory and admin views joining users with their profiles.

use crate::{
    model::{admin::AdminMemberDto, enums::Role, member::MemberDto},
    server::model::{profile::Profile, user::User},
};

/// An approved member as listed in the public directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub user: User,
    pub profile: Profile,
}

impl Member {
    pub fn into_dto(self) -> MemberDto {
        let Member { user, profile } = self;

        MemberDto {
            id: user.id,
            name: user.name,
            image: user.image,
            role: profile.role,
            bio: profile.bio,
            company: profile.company,
            title: profile.title,
            city: profile.city,
            linkedin_url: profile.linkedin_url,
            twitter_url: profile.twitter_url,
            website_url: profile.website_url,
            is_verified: profile.is_verified,
            is_premium: profile.is_premium,
            interests: profile.interests,
            looking_for: profile.looking_for,
        }
    }
}

/// Directory filters. Every field is optional and combined with AND.
#[derive(Debug, Clone, Default)]
pub struct MemberFilter {
    pub role: Option<Role>,
    /// Case-insensitive substring of the member's city.
    pub city: Option<String>,
    /// Free text matched against name, company, title and bio.
    pub query: Option<String>,
}

/// A user with their profile if one exists, as reviewed by admins.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminMember {
    pub user: User,
    pub profile: Option<Profile>,
}

impl AdminMember {
    pub fn into_dto(self) -> AdminMemberDto {
        let AdminMember { user, profile } = self;

        AdminMemberDto {
            id: user.id,
            email: user.email,
            name: user.name,
            image: user.image,
            is_admin: user.is_admin,
            created_at: user.created_at,
            has_profile: profile.is_some(),
            role: profile.as_ref().map(|p| p.role),
            company: profile.as_ref().and_then(|p| p.company.clone()),
            title: profile.as_ref().and_then(|p| p.title.clone()),
            city: profile.as_ref().and_then(|p| p.city.clone()),
            is_approved: profile.as_ref().map(|p| p.is_approved).unwrap_or(false),
            is_verified: profile.as_ref().map(|p| p.is_verified).unwrap_or(false),
        }
    }
}
