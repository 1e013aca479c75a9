use super::*;

/// Tests cancelling a registered RSVP.
///
/// Expected: Ok(Some(Registered)) and the seat released
#[tokio::test]
async fn releases_seat_for_registered() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .capacity(Some(1))
        .build()
        .await?;
    let user = factory::create_user(db).await?;

    let repo = RsvpRepository::new(db);
    repo.create(event.id, user.id).await?;

    let removed = repo.delete(event.id, user.id).await?;

    assert_eq!(removed, Some(RsvpStatus::Registered));
    assert_eq!(reload(db, &event.slug).await?.registered_count, 0);
    assert!(repo.find(event.id, user.id).await?.is_none());

    Ok(())
}

/// Tests cancelling a waitlisted RSVP.
///
/// Expected: Ok(Some(Waitlist)) and registered_count unchanged
#[tokio::test]
async fn waitlist_cancel_keeps_counter() -> Result<(), AppError> {
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
    repo.create(event.id, second.id).await?;

    let removed = repo.delete(event.id, second.id).await?;

    assert_eq!(removed, Some(RsvpStatus::Waitlist));
    assert_eq!(reload(db, &event.slug).await?.registered_count, 1);

    Ok(())
}

/// Tests cancelling when the user never RSVPed.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_rsvp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let user = factory::create_user(db).await?;

    let repo = RsvpRepository::new(db);
    assert!(repo.delete(event.id, user.id).await?.is_none());

    Ok(())
}
