use super::*;

/// Tests the dashboard lists for both parties.
///
/// Verifies that the target sees the request under received with the requester's
/// display fields, and the requester sees it under sent with the target's.
///
/// Expected: Ok with one entry on each side pointing at the other party
#[tokio::test]
async fn lists_counterpart_for_each_side() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_table(entity::prelude::Introduction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requester = factory::user::UserFactory::new(db)
        .name("Requester")
        .build()
        .await?;
    let target = factory::user::UserFactory::new(db).name("Target").build().await?;
    factory::profile::ProfileFactory::new(db, target.id)
        .company("Target Corp")
        .title("CTO")
        .approved(true)
        .build()
        .await?;

    factory::create_introduction(db, requester.id, target.id).await?;

    let repo = IntroductionRepository::new(db);

    let received = repo.get_received(target.id).await?;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].counterpart.id, requester.id);
    assert_eq!(received[0].counterpart.name.as_deref(), Some("Requester"));
    assert!(received[0].counterpart.company.is_none());

    let sent = repo.get_sent(requester.id).await?;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].counterpart.id, target.id);
    assert_eq!(sent[0].counterpart.company.as_deref(), Some("Target Corp"));
    assert_eq!(sent[0].counterpart.title.as_deref(), Some("CTO"));

    Ok(())
}

/// Tests that a user with no introductions gets empty lists.
///
/// Expected: Ok with both lists empty
#[tokio::test]
async fn empty_when_no_introductions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_member_tables()
        .with_table(entity::prelude::Introduction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = IntroductionRepository::new(db);
    assert!(repo.get_received(user.id).await?.is_empty());
    assert!(repo.get_sent(user.id).await?.is_empty());

    Ok(())
}
