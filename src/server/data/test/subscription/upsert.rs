use super::*;

fn param(user_id: i32, plan: Plan, status: SubscriptionStatus) -> UpsertSubscriptionParam {
    let now = Utc::now();
    UpsertSubscriptionParam {
        user_id,
        stripe_subscription_id: "sub_123".to_string(),
        stripe_price_id: Some("price_premium".to_string()),
        plan,
        status,
        current_period_start: Some(now),
        current_period_end: Some(now + Duration::days(30)),
        cancel_at_period_end: false,
    }
}

/// Tests the webhook lifecycle of a subscription.
///
/// Verifies that a created event inserts the row, an updated event replaces it in
/// place, and a deletion by Stripe id marks it canceled.
///
/// Expected: one row that ends active enterprise, then canceled
#[tokio::test]
async fn follows_subscription_lifecycle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = SubscriptionRepository::new(db);
    repo.upsert(param(user.id, Plan::Premium, SubscriptionStatus::Incomplete))
        .await?;
    let updated = repo
        .upsert(param(user.id, Plan::Enterprise, SubscriptionStatus::Active))
        .await?;

    assert_eq!(updated.plan, Plan::Enterprise);
    assert_eq!(updated.status, SubscriptionStatus::Active);

    let rows = repo
        .set_status_by_stripe_id("sub_123", SubscriptionStatus::Canceled)
        .await?;
    assert_eq!(rows, 1);

    let stored = repo.find_by_user_id(user.id).await?.unwrap();
    assert_eq!(stored.status, SubscriptionStatus::Canceled);
    assert_eq!(stored.plan, Plan::Enterprise);

    Ok(())
}

/// Tests marking a subscription past due after a failed payment.
///
/// Expected: one row updated to past_due
#[tokio::test]
async fn sets_status_by_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::subscription::SubscriptionFactory::new(db, user.id)
        .build()
        .await?;

    let repo = SubscriptionRepository::new(db);
    let rows = repo
        .set_status_by_user_id(user.id, SubscriptionStatus::PastDue)
        .await?;

    assert_eq!(rows, 1);
    let stored = repo.find_by_user_id(user.id).await?.unwrap();
    assert_eq!(stored.status, SubscriptionStatus::PastDue);

    Ok(())
}

/// Tests updating a user who never subscribed.
///
/// Expected: zero rows updated and no row created
#[tokio::test]
async fn status_update_without_row_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = SubscriptionRepository::new(db);
    let rows = repo
        .set_status_by_user_id(user.id, SubscriptionStatus::PastDue)
        .await?;

    assert_eq!(rows, 0);
    assert!(repo.find_by_user_id(user.id).await?.is_none());

    Ok(())
}
