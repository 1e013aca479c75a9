use super::*;

/// Tests accepting a pending introduction.
///
/// Expected: Ok(Some) with status accepted
#[tokio::test]
async fn updates_existing_introduction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_table(entity::prelude::Introduction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::create_user(db).await?;
    let target = factory::create_user(db).await?;

    let repo = IntroductionRepository::new(db);
    let intro = repo
        .create(CreateIntroductionParam {
            requester_id: requester.id,
            target_id: target.id,
            message: Some("Would love to chat".to_string()),
        })
        .await?;
    assert_eq!(intro.status, IntroductionStatus::Pending);

    let updated = repo
        .update_status(intro.id, IntroductionStatus::Accepted)
        .await?
        .unwrap();

    assert_eq!(updated.id, intro.id);
    assert_eq!(updated.status, IntroductionStatus::Accepted);

    Ok(())
}

/// Tests updating an introduction that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_introduction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_table(entity::prelude::Introduction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = IntroductionRepository::new(db);
    let result = repo
        .update_status(999, IntroductionStatus::Declined)
        .await?;

    assert!(result.is_none());

    Ok(())
}
