use crate::{
    model::enums::RsvpStatus,
    server::{
        data::{event::EventRepository, rsvp::RsvpRepository},
        error::AppError,
        model::event::{Event, RsvpOutcome},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;

/// Reloads an event through the repository to observe the stored counter.
async fn reload(db: &sea_orm::DatabaseConnection, slug: &str) -> Result<Event, AppError> {
    Ok(EventRepository::new(db).find_by_slug(slug).await?.unwrap())
}
