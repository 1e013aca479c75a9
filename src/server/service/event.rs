//! Events and RSVPs.

use chrono::{NaiveTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{enums::RsvpStatus, event::CreateEventDto},
    server::{
        data::{event::EventRepository, rsvp::RsvpRepository},
        error::AppError,
        model::event::{CreateEventParam, Event, RsvpOutcome, RsvpSummary},
        util::{parse::normalize_optional, slug::thread_slug},
    },
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new EventService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EventService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists published events dated from the start of today onwards.
    pub async fn upcoming(&self) -> Result<Vec<Event>, AppError> {
        let start_of_today = Utc::now()
            .date_naive()
            .and_time(NaiveTime::MIN)
            .and_utc();

        EventRepository::new(self.db).get_upcoming(start_of_today).await
    }

    /// Gets an event by slug.
    ///
    /// # Returns
    /// - `Ok(Event)` - The event
    /// - `Err(AppError::NotFound)` - No event has this slug
    /// - `Err(AppError)` - Database error
    pub async fn get_by_slug(&self, slug: &str) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }

    /// Registers the user for an event, waitlisting them once capacity is reached.
    ///
    /// # Arguments
    /// - `slug` - Slug of the event
    /// - `user_id` - The registering user
    ///
    /// # Returns
    /// - `Ok(RsvpStatus)` - `registered` or `waitlist`
    /// - `Err(AppError::NotFound)` - The event does not exist
    /// - `Err(AppError::BadRequest)` - The user already has an RSVP
    /// - `Err(AppError)` - Database error
    pub async fn rsvp(&self, slug: &str, user_id: i32) -> Result<RsvpStatus, AppError> {
        let event = self.get_by_slug(slug).await?;

        match RsvpRepository::new(self.db).create(event.id, user_id).await? {
            RsvpOutcome::Created(status) => {
                tracing::info!(
                    "User {} RSVP'd to event {} as {}",
                    user_id,
                    event.slug,
                    status
                );
                Ok(status)
            }
            RsvpOutcome::AlreadyRegistered => {
                Err(AppError::BadRequest("Already registered".to_string()))
            }
        }
    }

    /// Withdraws the user's RSVP. Withdrawing without an RSVP is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - RSVP removed or none existed
    /// - `Err(AppError::NotFound)` - The event does not exist
    /// - `Err(AppError)` - Database error
    pub async fn cancel_rsvp(&self, slug: &str, user_id: i32) -> Result<(), AppError> {
        let event = self.get_by_slug(slug).await?;

        RsvpRepository::new(self.db).delete(event.id, user_id).await?;

        Ok(())
    }

    /// Summarizes RSVPs for an event along with the caller's own status.
    pub async fn summary(&self, slug: &str, user_id: Option<i32>) -> Result<RsvpSummary, AppError> {
        let event = self.get_by_slug(slug).await?;

        RsvpRepository::new(self.db).summary(&event, user_id).await
    }

    /// Publishes a new event organized by `organizer_id`.
    ///
    /// The slug is the slugified title with a timestamp suffix.
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event
    /// - `Err(AppError::BadRequest)` - Blank title or no event date
    /// - `Err(AppError)` - Database error
    pub async fn create(&self, organizer_id: i32, dto: CreateEventDto) -> Result<Event, AppError> {
        let title = dto.title.trim().to_string();
        if title.is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }

        let Some(event_date) = dto.event_date else {
            return Err(AppError::BadRequest("Event date is required".to_string()));
        };

        let slug = thread_slug(&title, Utc::now());

        EventRepository::new(self.db)
            .create(CreateEventParam {
                title,
                slug,
                description: normalize_optional(dto.description),
                content: normalize_optional(dto.content),
                cover_image_url: normalize_optional(dto.cover_image_url),
                event_date,
                event_time: normalize_optional(dto.event_time),
                location: normalize_optional(dto.location),
                city: normalize_optional(dto.city),
                is_virtual: dto.is_virtual,
                virtual_link: normalize_optional(dto.virtual_link),
                capacity: dto.capacity.filter(|capacity| *capacity > 0),
                is_featured: dto.is_featured,
                organizer_id: Some(organizer_id),
                tags: dto.tags,
            })
            .await
    }
}
