use super::*;

/// Tests that both parties may view an introduction.
///
/// Expected: Ok(User) for the requester and for the target
#[tokio::test]
async fn participants_may_view() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_member_tables()
        .with_table(entity::prelude::Introduction)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let requester = factory::create_user(db).await?;
    let target = factory::create_user(db).await?;
    let intro = factory::create_introduction(db, requester.id, target.id).await?;

    let auth_session = AuthSession::new(session);
    let auth_guard = AuthGuard::new(db, session);

    auth_session.set_user_id(requester.id).await?;
    auth_guard
        .require(&[Permission::IntroductionParticipant(intro.id)])
        .await?;

    auth_session.set_user_id(target.id).await?;
    auth_guard
        .require(&[Permission::IntroductionParticipant(intro.id)])
        .await?;

    Ok(())
}

/// Tests that an outsider cannot view an introduction.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn outsider_denied() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_member_tables()
        .with_table(entity::prelude::Introduction)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let requester = factory::create_user(db).await?;
    let target = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let intro = factory::create_introduction(db, requester.id, target.id).await?;

    AuthSession::new(session).set_user_id(outsider.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::IntroductionParticipant(intro.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that only the target may change an introduction's status.
///
/// Expected: Err(AuthError::AccessDenied) for the requester, Ok for the target
#[tokio::test]
async fn only_target_may_update() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_member_tables()
        .with_table(entity::prelude::Introduction)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let requester = factory::create_user(db).await?;
    let target = factory::create_user(db).await?;
    let intro = factory::create_introduction(db, requester.id, target.id).await?;

    let auth_session = AuthSession::new(session);
    let auth_guard = AuthGuard::new(db, session);

    auth_session.set_user_id(requester.id).await?;
    let result = auth_guard
        .require(&[Permission::IntroductionTarget(intro.id)])
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    auth_session.set_user_id(target.id).await?;
    let user = auth_guard
        .require(&[Permission::IntroductionTarget(intro.id)])
        .await?;
    assert_eq!(user.id, target.id);

    Ok(())
}

/// Tests an introduction permission for a missing introduction.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_introduction_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_member_tables()
        .with_table(entity::prelude::Introduction)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::IntroductionTarget(999)])
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
