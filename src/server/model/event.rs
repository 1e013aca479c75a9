//! Event and RSVP domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        enums::RsvpStatus,
        event::{EventDto, RsvpSummaryDto},
    },
    server::{
        error::AppError,
        util::parse::{parse_stored, parse_string_list},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
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
    pub capacity: Option<i32>,
    /// Number of `registered` RSVPs, maintained by the RSVP repository.
    pub registered_count: i32,
    pub is_featured: bool,
    pub is_published: bool,
    pub tags: Vec<String>,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            title: entity.title,
            slug: entity.slug,
            description: entity.description,
            content: entity.content,
            cover_image_url: entity.cover_image_url,
            event_date: entity.event_date,
            event_time: entity.event_time,
            location: entity.location,
            city: entity.city,
            is_virtual: entity.is_virtual,
            virtual_link: entity.virtual_link,
            capacity: entity.capacity,
            registered_count: entity.registered_count,
            is_featured: entity.is_featured,
            is_published: entity.is_published,
            tags: parse_string_list("event.tags", &entity.tags)?,
        })
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            content: self.content,
            cover_image_url: self.cover_image_url,
            event_date: self.event_date,
            event_time: self.event_time,
            location: self.location,
            city: self.city,
            is_virtual: self.is_virtual,
            virtual_link: self.virtual_link,
            capacity: self.capacity,
            registered_count: self.registered_count,
            is_featured: self.is_featured,
            tags: self.tags,
        }
    }
}

/// Admin-created event. The slug is derived from the title by the service.
#[derive(Debug, Clone)]
pub struct CreateEventParam {
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
    pub capacity: Option<i32>,
    pub is_featured: bool,
    pub organizer_id: Option<i32>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rsvp {
    pub id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub status: RsvpStatus,
    pub created_at: DateTime<Utc>,
}

impl Rsvp {
    pub fn from_entity(entity: entity::event_rsvp::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            event_id: entity.event_id,
            user_id: entity.user_id,
            status: parse_stored("event_rsvp.status", entity.status, RsvpStatus::parse)?,
            created_at: entity.created_at,
        })
    }
}

/// Result of attempting to RSVP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpOutcome {
    /// A new RSVP row was stored with this status.
    Created(RsvpStatus),
    /// The user already has an RSVP for the event.
    AlreadyRegistered,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RsvpSummary {
    pub registered: u64,
    pub waitlist: u64,
    pub capacity: Option<i32>,
    pub user_status: Option<RsvpStatus>,
}

impl RsvpSummary {
    pub fn into_dto(self) -> RsvpSummaryDto {
        RsvpSummaryDto {
            registered: self.registered,
            waitlist: self.waitlist,
            capacity: self.capacity,
            user_status: self.user_status,
        }
    }
}
