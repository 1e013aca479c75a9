use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests creating a new user on first sign-in.
///
/// Verifies that the user repository creates a record keyed by email and that
/// new users are never admins.
///
/// Expected: Ok with user created and admin flag false
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            email: "ada@example.com".to_string(),
            name: Some("Ada".to_string()),
            image: None,
        })
        .await?;

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.name.as_deref(), Some("Ada"));
    assert!(!user.is_admin);

    Ok(())
}

/// Tests signing in again with the same email.
///
/// Verifies that the existing row is reused, the name and image are refreshed,
/// and the admin flag set elsewhere is preserved.
///
/// Expected: Ok with the same id, new name, admin preserved
#[tokio::test]
async fn updates_existing_user_and_preserves_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .email("ada@example.com")
        .name("Old Name")
        .admin(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            email: "ada@example.com".to_string(),
            name: Some("Ada Lovelace".to_string()),
            image: Some("https://img.example.com/ada.png".to_string()),
        })
        .await?;

    assert_eq!(user.id, existing.id);
    assert_eq!(user.name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(user.image.as_deref(), Some("https://img.example.com/ada.png"));
    assert!(user.is_admin);

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
