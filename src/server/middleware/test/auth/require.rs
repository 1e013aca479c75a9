use super::*;

mod require_admin;
mod require_approved_member;
mod require_introduction;

/// Tests that a request without a session user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session that points at a deleted user.
///
/// Expected: Err(AuthError::UserNotInDatabase) from require, Ok(None) from optional
#[tokio::test]
async fn rejects_session_for_missing_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(42).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(42)))
    ));
    assert!(auth_guard.optional().await?.is_none());

    Ok(())
}

/// Tests empty permission list grants access.
///
/// Verifies that when no permissions are required, any authenticated
/// user with a valid database record is granted access.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let returned = auth_guard.require(&[]).await?;

    assert_eq!(returned.id, user.id);
    assert_eq!(returned.email, user.email);

    Ok(())
}

/// Tests that if any permission fails, the whole check fails.
///
/// Verifies that an admin without an approved profile is still denied when
/// both permissions are required.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_member_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::UserFactory::new(db).admin(true).build().await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::Admin, Permission::ApprovedMember])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, msg))) => {
            assert_eq!(user_id, admin.id);
            assert!(msg.contains("approved profile"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}
