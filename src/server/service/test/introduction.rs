use crate::{
    model::{enums::IntroductionStatus, introduction::CreateIntroductionDto},
    server::{error::AppError, service::introduction::IntroductionService},
};
use test_utils::{builder::TestBuilder, factory};

fn request(target_id: Option<i32>) -> CreateIntroductionDto {
    CreateIntroductionDto {
        target_id,
        message: Some("  Would love to chat about agents  ".to_string()),
    }
}

/// Tests requesting an introduction to another member.
///
/// Expected: Ok with status pending and the trimmed message stored
#[tokio::test]
async fn creates_pending_introduction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let target = factory::create_user(db).await?;

    let intro = IntroductionService::new(db)
        .create(requester.id, request(Some(target.id)))
        .await?;

    assert_eq!(intro.status, IntroductionStatus::Pending);
    assert_eq!(intro.requester_id, requester.id);
    assert_eq!(intro.target_id, target.id);
    assert_eq!(intro.message.as_deref(), Some("Would love to chat about agents"));

    Ok(())
}

/// Tests requesting an introduction to yourself.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_self_introduction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = IntroductionService::new(db)
        .create(user.id, request(Some(user.id)))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a request body without a target id.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_missing_target_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = IntroductionService::new(db).create(user.id, request(None)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests requesting an introduction to a user id that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = IntroductionService::new(db)
        .create(user.id, request(Some(user.id + 1000)))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the target accepting an introduction.
///
/// Expected: status stored as accepted and visible in both users' lists
#[tokio::test]
async fn target_accepts_introduction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let target = factory::create_user(db).await?;
    let intro = factory::create_introduction(db, requester.id, target.id).await?;

    let service = IntroductionService::new(db);
    let updated = service
        .update_status(intro.id, IntroductionStatus::Accepted)
        .await?;
    assert_eq!(updated.status, IntroductionStatus::Accepted);

    let (received, _) = service.list(target.id).await?;
    let (_, sent) = service.list(requester.id).await?;
    assert_eq!(received.len(), 1);
    assert_eq!(sent.len(), 1);

    Ok(())
}
