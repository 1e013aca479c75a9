use chrono::{Duration, Utc};

use crate::{
    model::{enums::RsvpStatus, event::CreateEventDto},
    server::{error::AppError, service::event::EventService},
};
use test_utils::{builder::TestBuilder, factory};

/// Tests RSVPs filling a two-seat event.
///
/// Expected: two registered, the third waitlisted
#[tokio::test]
async fn waitlists_after_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .capacity(Some(2))
        .build()
        .await?;

    let service = EventService::new(db);
    let mut statuses = Vec::new();
    for _ in 0..3 {
        let user = factory::create_user(db).await?;
        statuses.push(service.rsvp(&event.slug, user.id).await?);
    }

    assert_eq!(
        statuses,
        vec![
            RsvpStatus::Registered,
            RsvpStatus::Registered,
            RsvpStatus::Waitlist
        ]
    );

    Ok(())
}

/// Tests RSVPing twice to the same event.
///
/// Expected: Err(BadRequest("Already registered"))
#[tokio::test]
async fn rejects_duplicate_rsvp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_event(db).await?;
    let user = factory::create_user(db).await?;

    let service = EventService::new(db);
    service.rsvp(&event.slug, user.id).await?;
    let result = service.rsvp(&event.slug, user.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Already registered"));

    Ok(())
}

/// Tests RSVPing to an unknown slug.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rsvp_to_missing_event_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = EventService::new(db).rsvp("no-such-event", user.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests withdrawing a registered RSVP from a full event.
///
/// Expected: the freed seat goes to the next RSVP and the summary reflects it
#[tokio::test]
async fn cancelling_frees_a_seat() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .capacity(Some(1))
        .build()
        .await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let service = EventService::new(db);
    service.rsvp(&event.slug, first.id).await?;
    service.cancel_rsvp(&event.slug, first.id).await?;

    let summary = service.summary(&event.slug, Some(first.id)).await?;
    assert_eq!(summary.registered, 0);
    assert_eq!(summary.user_status, None);

    let status = service.rsvp(&event.slug, second.id).await?;
    assert_eq!(status, RsvpStatus::Registered);

    Ok(())
}

/// Tests the anonymous RSVP summary.
///
/// Expected: counts and capacity reported with no user status
#[tokio::test]
async fn anonymous_summary_has_no_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::EventFactory::new(db)
        .capacity(Some(10))
        .build()
        .await?;
    let user = factory::create_user(db).await?;

    let service = EventService::new(db);
    service.rsvp(&event.slug, user.id).await?;

    let summary = service.summary(&event.slug, None).await?;
    assert_eq!(summary.registered, 1);
    assert_eq!(summary.capacity, Some(10));
    assert_eq!(summary.user_status, None);

    Ok(())
}

/// Tests the upcoming event list.
///
/// Expected: only published events from today onwards, soonest first
#[tokio::test]
async fn lists_upcoming_published_events() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let later = factory::event::EventFactory::new(db)
        .event_date(now + Duration::days(14))
        .build()
        .await?;
    let sooner = factory::event::EventFactory::new(db)
        .event_date(now + Duration::days(2))
        .build()
        .await?;
    factory::event::EventFactory::new(db)
        .event_date(now - Duration::days(3))
        .build()
        .await?;
    factory::event::EventFactory::new(db)
        .published(false)
        .build()
        .await?;

    let events = EventService::new(db).upcoming().await?;

    let slugs: Vec<_> = events.iter().map(|event| event.slug.as_str()).collect();
    assert_eq!(slugs, vec![sooner.slug.as_str(), later.slug.as_str()]);

    Ok(())
}

/// Tests admin event creation.
///
/// Expected: slug derived from the title, organizer recorded, blank title or missing date rejected
#[tokio::test]
async fn creates_event_with_derived_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db).admin(true).build().await?;
    let dto = CreateEventDto {
        title: "  Demo Day: Spring  ".to_string(),
        description: Some("Founders demo".to_string()),
        content: None,
        cover_image_url: None,
        event_date: Some(Utc::now() + Duration::days(30)),
        event_time: Some("18:00".to_string()),
        location: Some("  ".to_string()),
        city: Some("Bengaluru".to_string()),
        is_virtual: false,
        virtual_link: None,
        capacity: Some(0),
        is_featured: true,
        tags: vec!["demo".to_string()],
    };

    let service = EventService::new(db);
    let event = service.create(admin.id, dto.clone()).await?;

    assert_eq!(event.title, "Demo Day: Spring");
    assert!(event.slug.starts_with("demo-day-spring-"));
    assert_eq!(event.location, None);
    assert_eq!(event.capacity, None);
    assert_eq!(service.get_by_slug(&event.slug).await?.id, event.id);

    let undated = CreateEventDto {
        event_date: None,
        ..dto.clone()
    };
    assert!(matches!(
        service.create(admin.id, undated).await,
        Err(AppError::BadRequest(_))
    ));

    let blank = CreateEventDto {
        title: " ".to_string(),
        ..dto
    };
    assert!(matches!(
        service.create(admin.id, blank).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
