use super::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// Tests registering for an event with free seats.
///
/// Expected: Ok(Created(Registered)) and registered_count incremented
#[tokio::test]
async fn registers_when_seats_remain() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .capacity(Some(2))
        .build()
        .await?;
    let user = factory::create_user(db).await?;

    let repo = RsvpRepository::new(db);
    let outcome = repo.create(event.id, user.id).await?;

    assert_eq!(outcome, RsvpOutcome::Created(RsvpStatus::Registered));
    assert_eq!(reload(db, &event.slug).await?.registered_count, 1);

    Ok(())
}

/// Tests registering once the event is full.
///
/// Verifies that the counter never exceeds capacity and later RSVPs land on the
/// waitlist.
///
/// Expected: second user waitlisted and registered_count stays at capacity
#[tokio::test]
async fn waitlists_when_at_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .capacity(Some(1))
        .build()
        .await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = RsvpRepository::new(db);
    repo.create(event.id, first.id).await?;
    let outcome = repo.create(event.id, second.id).await?;

    assert_eq!(outcome, RsvpOutcome::Created(RsvpStatus::Waitlist));

    let stored = reload(db, &event.slug).await?;
    assert_eq!(stored.registered_count, 1);

    let summary = repo.summary(&stored, Some(second.id)).await?;
    assert_eq!(summary.registered, 1);
    assert_eq!(summary.waitlist, 1);
    assert_eq!(summary.user_status, Some(RsvpStatus::Waitlist));

    Ok(())
}

/// Tests an event without a capacity limit.
///
/// Expected: every RSVP registered
#[tokio::test]
async fn unlimited_capacity_always_registers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;

    let repo = RsvpRepository::new(db);
    for _ in 0..3 {
        let user = factory::create_user(db).await?;
        let outcome = repo.create(event.id, user.id).await?;
        assert_eq!(outcome, RsvpOutcome::Created(RsvpStatus::Registered));
    }

    assert_eq!(reload(db, &event.slug).await?.registered_count, 3);

    Ok(())
}

/// Tests RSVPing twice for the same event.
///
/// Expected: second call reports AlreadyRegistered without touching the counter
#[tokio::test]
async fn rejects_duplicate_rsvp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let user = factory::create_user(db).await?;

    let repo = RsvpRepository::new(db);
    repo.create(event.id, user.id).await?;
    let outcome = repo.create(event.id, user.id).await?;

    assert_eq!(outcome, RsvpOutcome::AlreadyRegistered);
    assert_eq!(reload(db, &event.slug).await?.registered_count, 1);

    Ok(())
}

/// Tests registering after RSVP rows were removed without releasing their seats.
///
/// A user cascade delete removes RSVP rows but leaves the event's counter alone.
/// The counter is resynced from the remaining rows before a seat is claimed.
///
/// Expected: next user registered and registered_count matches the rows
#[tokio::test]
async fn frees_seats_of_removed_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .capacity(Some(1))
        .build()
        .await?;
    let departed = factory::create_user(db).await?;
    let newcomer = factory::create_user(db).await?;

    let repo = RsvpRepository::new(db);
    repo.create(event.id, departed.id).await?;

    entity::prelude::EventRsvp::delete_many()
        .filter(entity::event_rsvp::Column::UserId.eq(departed.id))
        .exec(db)
        .await?;
    assert_eq!(reload(db, &event.slug).await?.registered_count, 1);

    let outcome = repo.create(event.id, newcomer.id).await?;

    assert_eq!(outcome, RsvpOutcome::Created(RsvpStatus::Registered));
    assert_eq!(reload(db, &event.slug).await?.registered_count, 1);

    Ok(())
}
