//! Event data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::event::{CreateEventParam, Event},
    util::parse::encode_string_list,
};

/// Repository providing database operations for events.
pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    /// Creates a new EventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EventRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists published events dated on or after `from`, soonest first.
    ///
    /// # Arguments
    /// - `from` - Earliest event date to include, typically the start of today
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - Upcoming published events
    /// - `Err(AppError)` - Database error or invalid stored tags
    pub async fn get_upcoming(&self, from: DateTime<Utc>) -> Result<Vec<Event>, AppError> {
        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::IsPublished.eq(true))
            .filter(entity::event::Column::EventDate.gte(from))
            .order_by_asc(entity::event::Column::EventDate)
            .all(self.db)
            .await?;

        entities.into_iter().map(Event::from_entity).collect()
    }

    /// Finds an event by slug.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - Event found
    /// - `Ok(None)` - No event with that slug
    /// - `Err(AppError)` - Database error or invalid stored tags
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, AppError> {
        let entity = entity::prelude::Event::find()
            .filter(entity::event::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        entity.map(Event::from_entity).transpose()
    }

    /// Stores a new published event with no registrations.
    ///
    /// # Returns
    /// - `Ok(Event)` - The stored event
    /// - `Err(AppError)` - Database error, including a duplicate slug
    pub async fn create(&self, param: CreateEventParam) -> Result<Event, AppError> {
        let now = Utc::now();

        let entity = entity::event::ActiveModel {
            title: ActiveValue::Set(param.title),
            slug: ActiveValue::Set(param.slug),
            description: ActiveValue::Set(param.description),
            content: ActiveValue::Set(param.content),
            cover_image_url: ActiveValue::Set(param.cover_image_url),
            event_date: ActiveValue::Set(param.event_date),
            event_time: ActiveValue::Set(param.event_time),
            location: ActiveValue::Set(param.location),
            city: ActiveValue::Set(param.city),
            is_virtual: ActiveValue::Set(param.is_virtual),
            virtual_link: ActiveValue::Set(param.virtual_link),
            capacity: ActiveValue::Set(param.capacity),
            registered_count: ActiveValue::Set(0),
            is_featured: ActiveValue::Set(param.is_featured),
            is_published: ActiveValue::Set(true),
            organizer_id: ActiveValue::Set(param.organizer_id),
            tags: ActiveValue::Set(encode_string_list(&param.tags)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Event::from_entity(entity)
    }
}
