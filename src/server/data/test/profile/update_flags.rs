use super::*;

/// Tests approving a pending profile.
///
/// Verifies that the repository reports the state before and after the update so
/// the caller can detect the approval transition.
///
/// Expected: Ok(Some) with before unapproved and after approved
#[tokio::test]
async fn reports_before_and_after() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_profile(db, user.id).await?;

    let repo = ProfileRepository::new(db);
    let (before, after) = repo
        .update_flags(UpdateProfileFlagsParam {
            user_id: user.id,
            is_approved: Some(true),
            is_verified: None,
        })
        .await?
        .unwrap();

    assert!(!before.is_approved);
    assert!(after.is_approved);
    assert!(!after.is_verified);

    Ok(())
}

/// Tests updating flags for a user who never onboarded.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ProfileRepository::new(db);
    let result = repo
        .update_flags(UpdateProfileFlagsParam {
            user_id: user.id,
            is_approved: Some(true),
            is_verified: Some(true),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the one-time admin setup on a user with no profile.
///
/// Expected: Ok with a default profile that is approved and verified
#[tokio::test]
async fn approve_and_verify_creates_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ProfileRepository::new(db);
    let profile = repo.approve_and_verify(user.id).await?;

    assert!(profile.is_approved);
    assert!(profile.is_verified);
    assert_eq!(profile.role, Role::Community);

    Ok(())
}
