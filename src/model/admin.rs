use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::enums::Role;

/// A user row with the profile fields an admin reviews, if a profile exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AdminMemberDto {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub has_profile: bool,
    pub role: Option<Role>,
    pub company: Option<String>,
    pub title: Option<String>,
    pub city: Option<String>,
    pub is_approved: bool,
    pub is_verified: bool,
}

/// Approval and verification update. Only the flags present are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberDto {
    #[serde(default)]
    pub member_id: Option<i32>,
    #[serde(default)]
    pub is_approved: Option<bool>,
    #[serde(default)]
    pub is_verified: Option<bool>,
}

/// One-time bootstrap of the first admin account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AdminSetupDto {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub secret: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct SetupResultDto {
    pub success: bool,
    pub message: String,
}
