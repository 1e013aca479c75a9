//! Event factory for creating community events.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events.
///
/// Events default to published, one week out, with unlimited capacity.
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    slug: String,
    event_date: DateTime<Utc>,
    capacity: Option<i32>,
    is_published: bool,
}

impl<'a> EventFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Event {}", id),
            slug: format!("event-{}", id),
            event_date: Utc::now() + Duration::days(7),
            capacity: None,
            is_published: true,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn event_date(mut self, event_date: DateTime<Utc>) -> Self {
        self.event_date = event_date;
        self
    }

    pub fn capacity(mut self, capacity: Option<i32>) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.is_published = published;
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        entity::event::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(None),
            content: ActiveValue::Set(None),
            cover_image_url: ActiveValue::Set(None),
            event_date: ActiveValue::Set(self.event_date),
            event_time: ActiveValue::Set(None),
            location: ActiveValue::Set(None),
            city: ActiveValue::Set(None),
            is_virtual: ActiveValue::Set(false),
            virtual_link: ActiveValue::Set(None),
            capacity: ActiveValue::Set(self.capacity),
            registered_count: ActiveValue::Set(0),
            is_featured: ActiveValue::Set(false),
            is_published: ActiveValue::Set(self.is_published),
            organizer_id: ActiveValue::Set(None),
            tags: ActiveValue::Set("[]".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published event with unlimited capacity.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}
