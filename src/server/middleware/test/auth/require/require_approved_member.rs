use super::*;

/// Tests that an approved member may post.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_approved_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (user, _) = factory::helpers::create_approved_member(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let returned = auth_guard.require(&[Permission::ApprovedMember]).await?;

    assert_eq!(returned.id, user.id);

    Ok(())
}

/// Tests that a member awaiting approval is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_pending_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    factory::create_profile(db, user.id).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::ApprovedMember]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that a user who never onboarded is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_user_without_profile() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::ApprovedMember]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
