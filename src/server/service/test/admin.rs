use crate::{
    model::admin::{AdminSetupDto, UpdateMemberDto},
    server::{
        config::EmailConfig,
        data::{profile::ProfileRepository, user::UserRepository},
        error::AppError,
        service::{admin::AdminService, email::EmailService},
    },
};
use test_utils::{builder::TestBuilder, factory};

const SETUP_SECRET: &str = "test-setup-secret";

fn email_service() -> EmailService {
    EmailService::new(
        reqwest::Client::new(),
        EmailConfig::default(),
        "http://localhost:8080".to_string(),
    )
}

/// Tests approving a pending member.
///
/// Verifies that only the flags in the request are written and the approval email is
/// attempted without failing the request when email is unconfigured.
///
/// Expected: profile approved, verification unchanged
#[tokio::test]
async fn approves_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_profile(db, user.id).await?;

    let profile = AdminService::new(db)
        .update_member(
            UpdateMemberDto {
                member_id: Some(user.id),
                is_approved: Some(true),
                is_verified: None,
            },
            &email_service(),
        )
        .await?;

    assert!(profile.is_approved);
    assert!(!profile.is_verified);

    Ok(())
}

/// Tests updating without a member id.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn update_requires_member_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AdminService::new(db)
        .update_member(UpdateMemberDto::default(), &email_service())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests updating a user who has not created a profile.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn update_without_profile_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = AdminService::new(db)
        .update_member(
            UpdateMemberDto {
                member_id: Some(user.id),
                is_approved: Some(true),
                is_verified: None,
            },
            &email_service(),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the admin member list.
///
/// Expected: users with and without profiles are both listed
#[tokio::test]
async fn lists_all_members() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let with_profile = factory::create_user(db).await?;
    factory::create_profile(db, with_profile.id).await?;
    factory::create_user(db).await?;

    let members = AdminService::new(db).list_members().await?;

    assert_eq!(members.len(), 2);
    assert_eq!(members.iter().filter(|m| m.profile.is_some()).count(), 1);

    Ok(())
}

/// Tests the one-time setup with the configured secret.
///
/// Expected: user becomes admin with an approved, verified profile
#[tokio::test]
async fn setup_grants_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("first@example.com")
        .build()
        .await?;

    let message = AdminService::new(db)
        .setup(
            AdminSetupDto {
                email: Some("first@example.com".to_string()),
                secret: Some(SETUP_SECRET.to_string()),
            },
            SETUP_SECRET,
        )
        .await?;
    assert_eq!(message, "first@example.com is now an admin");

    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert!(stored.is_admin);

    let profile = ProfileRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();
    assert!(profile.is_approved);
    assert!(profile.is_verified);

    Ok(())
}

/// Tests setup with an email typed in a different case than the stored one.
///
/// Verifies that the email is matched the way sign-in stores it, trimmed and
/// lowercased.
///
/// Expected: user becomes admin and the message names the lowercased email
#[tokio::test]
async fn setup_matches_email_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("founder@example.com")
        .build()
        .await?;

    let message = AdminService::new(db)
        .setup(
            AdminSetupDto {
                email: Some("  Founder@Example.COM ".to_string()),
                secret: Some(SETUP_SECRET.to_string()),
            },
            SETUP_SECRET,
        )
        .await?;
    assert_eq!(message, "founder@example.com is now an admin");

    let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert!(stored.is_admin);

    Ok(())
}

/// Tests setup failures.
///
/// Expected: wrong secret Forbidden, missing email BadRequest, unknown email NotFound
#[tokio::test]
async fn setup_rejects_invalid_requests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AdminService::new(db);

    let wrong_secret = service
        .setup(
            AdminSetupDto {
                email: Some("first@example.com".to_string()),
                secret: Some("guess".to_string()),
            },
            SETUP_SECRET,
        )
        .await;
    assert!(matches!(wrong_secret, Err(AppError::Forbidden(_))));

    let missing_email = service
        .setup(
            AdminSetupDto {
                email: None,
                secret: Some(SETUP_SECRET.to_string()),
            },
            SETUP_SECRET,
        )
        .await;
    assert!(matches!(missing_email, Err(AppError::BadRequest(_))));

    let unknown_email = service
        .setup(
            AdminSetupDto {
                email: Some("nobody@example.com".to_string()),
                secret: Some(SETUP_SECRET.to_string()),
            },
            SETUP_SECRET,
        )
        .await;
    assert!(matches!(unknown_email, Err(AppError::NotFound(_))));

    Ok(())
}
