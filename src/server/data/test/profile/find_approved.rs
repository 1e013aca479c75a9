use super::*;

/// Tests that the directory hides members awaiting approval.
///
/// Expected: Ok with only the approved member listed
#[tokio::test]
async fn excludes_unapproved_profiles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (approved, _) = factory::helpers::create_approved_member(db).await?;
    let pending = factory::create_user(db).await?;
    factory::create_profile(db, pending.id).await?;

    let repo = ProfileRepository::new(db);
    let members = repo.find_approved(&MemberFilter::default()).await?;

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user.id, approved.id);

    Ok(())
}

/// Tests directory ordering.
///
/// Verifies that verified members are listed before unverified ones regardless
/// of name.
///
/// Expected: Ok with the verified member first
#[tokio::test]
async fn lists_verified_members_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let aaron = factory::user::UserFactory::new(db).name("Aaron").build().await?;
    factory::profile::ProfileFactory::new(db, aaron.id)
        .approved(true)
        .build()
        .await?;

    let zoe = factory::user::UserFactory::new(db).name("Zoe").build().await?;
    factory::profile::ProfileFactory::new(db, zoe.id)
        .approved(true)
        .verified(true)
        .build()
        .await?;

    let repo = ProfileRepository::new(db);
    let members = repo.find_approved(&MemberFilter::default()).await?;

    let ids: Vec<i32> = members.iter().map(|m| m.user.id).collect();
    assert_eq!(ids, vec![zoe.id, aaron.id]);

    Ok(())
}

/// Tests the role, city and text filters together.
///
/// Expected: Ok with only the Berlin founder matching "agents"
#[tokio::test]
async fn applies_role_city_and_text_filters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_user(db).await?;
    factory::profile::ProfileFactory::new(db, target.id)
        .role("founder")
        .city("Berlin")
        .bio("Shipping autonomous agents")
        .approved(true)
        .build()
        .await?;

    let other_city = factory::create_user(db).await?;
    factory::profile::ProfileFactory::new(db, other_city.id)
        .role("founder")
        .city("Lisbon")
        .bio("Shipping autonomous agents")
        .approved(true)
        .build()
        .await?;

    let investor = factory::create_user(db).await?;
    factory::profile::ProfileFactory::new(db, investor.id)
        .role("investor")
        .city("Berlin")
        .bio("Backing agents")
        .approved(true)
        .build()
        .await?;

    let repo = ProfileRepository::new(db);
    let members = repo
        .find_approved(&MemberFilter {
            role: Some(Role::Founder),
            city: Some("berlin".to_string()),
            query: Some("agents".to_string()),
        })
        .await?;

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].user.id, target.id);

    Ok(())
}

/// Tests fetching a single member who is still pending.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_approved_member_hides_pending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = factory::create_user(db).await?;
    factory::create_profile(db, pending.id).await?;

    let repo = ProfileRepository::new(db);
    let member = repo.find_approved_member(pending.id).await?;

    assert!(member.is_none());

    Ok(())
}
