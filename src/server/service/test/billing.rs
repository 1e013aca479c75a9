use chrono::Utc;
use serde_json::json;

use crate::{
    model::enums::{Plan, SubscriptionStatus},
    server::{
        config::StripeConfig,
        data::{subscription::SubscriptionRepository, user::UserRepository},
        error::{billing::BillingError, AppError},
        model::user::User,
        service::billing::{webhook::test_signature_header, BillingService, WebhookOutcome},
    },
};
use test_utils::{builder::TestBuilder, factory};

const WEBHOOK_SECRET: &str = "whsec_test_secret";
const APP_URL: &str = "http://localhost:8080";

fn stripe_config() -> StripeConfig {
    StripeConfig {
        secret_key: Some("sk_test_key".to_string()),
        webhook_secret: Some(WEBHOOK_SECRET.to_string()),
        premium_price_id: Some("price_premium".to_string()),
        enterprise_price_id: Some("price_enterprise".to_string()),
    }
}

/// Signs and delivers an event through the webhook entry point.
async fn deliver(
    service: &BillingService<'_>,
    event_type: &str,
    object: serde_json::Value,
) -> Result<WebhookOutcome, AppError> {
    let payload = json!({
        "id": format!("evt_{}", event_type.replace('.', "_")),
        "type": event_type,
        "data": { "object": object },
    })
    .to_string();

    let now = Utc::now().timestamp();
    let signature = test_signature_header(WEBHOOK_SECRET, now, &payload);

    service.handle_webhook(&payload, Some(&signature), now).await
}

fn subscription_object(user_id: i32, status: &str, price_id: &str) -> serde_json::Value {
    json!({
        "id": "sub_123",
        "customer": "cus_123",
        "status": status,
        "cancel_at_period_end": false,
        "metadata": { "userId": user_id.to_string() },
        "items": { "data": [{
            "price": { "id": price_id },
            "current_period_start": 1_767_225_600,
            "current_period_end": 1_769_904_000
        }]}
    })
}

/// Tests the checkout flow as Stripe reports it.
///
/// Verifies that a completed checkout links the customer and the following
/// subscription update stores the mapped plan.
///
/// Expected: customer linked and an active enterprise subscription stored
#[tokio::test]
async fn checkout_then_subscription_update_activates_plan() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let http_client = reqwest::Client::new();
    let config = stripe_config();
    let service = BillingService::new(db, &http_client, &config, APP_URL);

    let outcome = deliver(
        &service,
        "checkout.session.completed",
        json!({
            "id": "cs_test_1",
            "customer": "cus_123",
            "subscription": "sub_123",
            "metadata": { "userId": user.id.to_string() }
        }),
    )
    .await?;
    assert_eq!(outcome, WebhookOutcome::Processed);

    let linked = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
    assert_eq!(linked.stripe_customer_id.as_deref(), Some("cus_123"));

    deliver(
        &service,
        "customer.subscription.updated",
        subscription_object(user.id, "active", "price_enterprise"),
    )
    .await?;

    let stored = SubscriptionRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();
    assert_eq!(stored.plan, Plan::Enterprise);
    assert_eq!(stored.status, SubscriptionStatus::Active);
    assert_eq!(stored.stripe_subscription_id.as_deref(), Some("sub_123"));
    assert!(stored.current_period_end.is_some());

    let effective = service.subscription(user.id).await?;
    assert!(effective.is_premium);

    Ok(())
}

/// Tests a subscription event without metadata after the customer was linked.
///
/// Expected: the user is found through the customer id
#[tokio::test]
async fn subscription_update_falls_back_to_customer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .stripe_customer_id("cus_123")
        .build()
        .await?;
    let http_client = reqwest::Client::new();
    let config = stripe_config();
    let service = BillingService::new(db, &http_client, &config, APP_URL);

    let mut object = subscription_object(user.id, "incomplete_expired", "price_unknown");
    object["metadata"] = json!({});
    deliver(&service, "customer.subscription.created", object).await?;

    let stored = SubscriptionRepository::new(db)
        .find_by_user_id(user.id)
        .await?
        .unwrap();
    assert_eq!(stored.plan, Plan::Premium);
    assert_eq!(stored.status, SubscriptionStatus::Incomplete);

    Ok(())
}

/// Tests a failed invoice payment and a later cancellation.
///
/// Expected: status past_due, then canceled
#[tokio::test]
async fn payment_failure_and_deletion_update_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .stripe_customer_id("cus_123")
        .build()
        .await?;
    factory::subscription::SubscriptionFactory::new(db, user.id)
        .plan("premium")
        .status("active")
        .stripe_subscription_id("sub_123")
        .build()
        .await?;

    let http_client = reqwest::Client::new();
    let config = stripe_config();
    let service = BillingService::new(db, &http_client, &config, APP_URL);
    let repo = SubscriptionRepository::new(db);

    deliver(&service, "invoice.payment_failed", json!({ "customer": "cus_123" })).await?;
    let stored = repo.find_by_user_id(user.id).await?.unwrap();
    assert_eq!(stored.status, SubscriptionStatus::PastDue);
    assert!(!service.subscription(user.id).await?.is_premium);

    let mut object = subscription_object(user.id, "canceled", "price_premium");
    object["metadata"] = json!({});
    deliver(&service, "customer.subscription.deleted", object).await?;
    let stored = repo.find_by_user_id(user.id).await?.unwrap();
    assert_eq!(stored.status, SubscriptionStatus::Canceled);

    Ok(())
}

/// Tests webhook deliveries that must be rejected or skipped.
///
/// Expected: missing signature and wrong secret rejected, unconfigured Stripe skipped,
/// unknown event types acknowledged
#[tokio::test]
async fn webhook_rejects_unsigned_and_skips_unconfigured() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let http_client = reqwest::Client::new();
    let config = stripe_config();
    let service = BillingService::new(db, &http_client, &config, APP_URL);

    let payload = r#"{"id":"evt_1","type":"customer.created","data":{"object":{}}}"#;
    let now = Utc::now().timestamp();

    let missing = service.handle_webhook(payload, None, now).await;
    assert!(matches!(
        missing,
        Err(AppError::BillingErr(BillingError::MissingSignature))
    ));

    let forged = test_signature_header("whsec_other", now, payload);
    let invalid = service.handle_webhook(payload, Some(&forged), now).await;
    assert!(matches!(
        invalid,
        Err(AppError::BillingErr(BillingError::InvalidSignature))
    ));

    let signed = test_signature_header(WEBHOOK_SECRET, now, payload);
    let unknown = service.handle_webhook(payload, Some(&signed), now).await?;
    assert_eq!(unknown, WebhookOutcome::Processed);

    let unconfigured = StripeConfig::default();
    let service = BillingService::new(db, &http_client, &unconfigured, APP_URL);
    let skipped = service.handle_webhook(payload, None, now).await?;
    assert_eq!(skipped, WebhookOutcome::Skipped);

    Ok(())
}

/// Tests checkout and portal requests that fail validation before calling Stripe.
///
/// Expected: Err(BadRequest) for an unknown plan, the free plan and a user without a
/// billing account
#[tokio::test]
async fn rejects_invalid_billing_requests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let http_client = reqwest::Client::new();
    let config = stripe_config();
    let service = BillingService::new(db, &http_client, &config, APP_URL);

    assert!(matches!(
        service.checkout(&user, "platinum").await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.checkout(&user, "free").await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.portal(&user).await,
        Err(AppError::BadRequest(msg)) if msg == "No billing account found"
    ));

    Ok(())
}
