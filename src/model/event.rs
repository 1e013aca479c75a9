use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::enums::RsvpStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub cover_image_url: Option<String>,
    pub event_date: DateTime<Utc>,
    pub event_time: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub is_virtual: bool,
    pub virtual_link: Option<String>,
    /// `None` means unlimited seats.
    pub capacity: Option<i32>,
    pub registered_count: i32,
    pub is_featured: bool,
    pub tags: Vec<String>,
}

/// Outcome of an RSVP: a seat or a waitlist place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RsvpResultDto {
    pub status: RsvpStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RsvpSummaryDto {
    pub registered: u64,
    pub waitlist: u64,
    pub capacity: Option<i32>,
    /// The caller's own RSVP status, `None` when anonymous or not registered.
    pub user_status: Option<RsvpStatus>,
}

/// Admin form for publishing a new event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub event_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub event_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub virtual_link: Option<String>,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}
