use super::*;

/// Tests linking a Stripe customer to a user.
///
/// Verifies that the customer id is stored and the user can then be found by it,
/// which the webhook handler relies on when metadata is missing.
///
/// Expected: Ok with one row updated and lookup by customer id succeeding
#[tokio::test]
async fn links_customer_and_finds_user_by_it() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_stripe_customer_id(user.id, "cus_123").await?;
    assert_eq!(updated, 1);

    let found = repo.find_by_stripe_customer_id("cus_123").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests looking up an unknown Stripe customer.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_customer_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_stripe_customer_id("cus_missing").await?;
    assert!(found.is_none());

    Ok(())
}
