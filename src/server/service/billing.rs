//! Subscription billing through Stripe.
//!
//! Checkout and the billing portal are hosted by Stripe; this service only creates the
//! sessions. Subscription rows are written exclusively from verified webhooks.

pub mod stripe;
pub mod webhook;

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;

use crate::{
    model::{
        billing::SubscriptionDto,
        enums::{Plan, SubscriptionStatus},
    },
    server::{
        config::StripeConfig,
        data::{subscription::SubscriptionRepository, user::UserRepository},
        error::{billing::BillingError, AppError},
        model::{
            subscription::{Subscription, UpsertSubscriptionParam},
            user::User,
        },
        service::billing::{
            stripe::StripeClient,
            webhook::{
                metadata_user_id, verify_event, CheckoutSessionObject, InvoiceObject, StripeEvent,
                SubscriptionObject,
            },
        },
    },
};

/// Whether a webhook was processed or acknowledged without processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookOutcome {
    Processed,
    /// Stripe is not configured; the delivery is acknowledged and dropped.
    Skipped,
}

pub struct BillingService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    config: &'a StripeConfig,
    app_url: &'a str,
}

impl<'a> BillingService<'a> {
    /// Creates a new BillingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http_client` - Reference to the HTTP client for Stripe API requests
    /// - `config` - Stripe keys and plan price ids
    /// - `app_url` - Public base URL used for Stripe redirects
    ///
    /// # Returns
    /// - `BillingService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        config: &'a StripeConfig,
        app_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            config,
            app_url,
        }
    }

    /// Starts a hosted checkout for a paid plan.
    ///
    /// # Arguments
    /// - `user` - The paying user
    /// - `plan` - Requested plan name
    ///
    /// # Returns
    /// - `Ok(String)` - Checkout URL
    /// - `Err(AppError::BadRequest)` - Unknown plan or a plan without a price id
    /// - `Err(AppError::BillingErr)` - Stripe not configured or rejected the request
    pub async fn checkout(&self, user: &User, plan: &str) -> Result<String, AppError> {
        let plan = Plan::parse(plan.trim())
            .ok_or_else(|| AppError::BadRequest("Invalid plan".to_string()))?;

        let price_id = price_for_plan(self.config, plan).ok_or_else(|| {
            AppError::BadRequest("Plan not available for purchase".to_string())
        })?;

        let url = self
            .client()?
            .create_checkout_session(user.id, &user.email, price_id, self.app_url)
            .await?;

        tracing::info!("Created {} checkout for user {}", plan, user.id);

        Ok(url)
    }

    /// Opens the billing portal for a user who has completed a checkout.
    ///
    /// # Returns
    /// - `Ok(String)` - Portal URL
    /// - `Err(AppError::BadRequest)` - The user has no Stripe customer
    /// - `Err(AppError::BillingErr)` - Stripe not configured or rejected the request
    pub async fn portal(&self, user: &User) -> Result<String, AppError> {
        let Some(customer_id) = user.stripe_customer_id.as_deref() else {
            return Err(AppError::BadRequest("No billing account found".to_string()));
        };

        let return_url = format!("{}/dashboard", self.app_url);

        self.client()?
            .create_portal_session(customer_id, &return_url)
            .await
    }

    /// Reports the user's effective subscription.
    pub async fn subscription(&self, user_id: i32) -> Result<SubscriptionDto, AppError> {
        let subscription = SubscriptionRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?;

        Ok(Subscription::effective_dto(subscription))
    }

    /// Verifies and applies a Stripe webhook delivery.
    ///
    /// # Arguments
    /// - `payload` - Raw request body
    /// - `signature` - `Stripe-Signature` header, if present
    /// - `now` - Current unix time in seconds
    ///
    /// # Returns
    /// - `Ok(WebhookOutcome)` - Delivery applied, ignored, or skipped when unconfigured
    /// - `Err(AppError::BillingErr)` - Missing or invalid signature, or unreadable event
    /// - `Err(AppError)` - Applying the event failed
    pub async fn handle_webhook(
        &self,
        payload: &str,
        signature: Option<&str>,
        now: i64,
    ) -> Result<WebhookOutcome, AppError> {
        let (Some(_), Some(secret)) = (
            self.config.secret_key.as_deref(),
            self.config.webhook_secret.as_deref(),
        ) else {
            tracing::info!("Stripe not configured, skipping webhook");
            return Ok(WebhookOutcome::Skipped);
        };

        let signature = signature.ok_or(BillingError::MissingSignature)?;
        let event = verify_event(payload, signature, secret, now)?;

        self.apply_event(&event).await?;

        Ok(WebhookOutcome::Processed)
    }

    async fn apply_event(&self, event: &StripeEvent) -> Result<(), AppError> {
        match event.event_type.as_str() {
            "checkout.session.completed" => self.checkout_completed(object(event)?).await,
            "customer.subscription.created" | "customer.subscription.updated" => {
                self.subscription_updated(object(event)?).await
            }
            "customer.subscription.deleted" => self.subscription_deleted(object(event)?).await,
            "invoice.payment_failed" => self.payment_failed(object(event)?).await,
            other => {
                tracing::info!("Unhandled Stripe event type {} ({})", other, event.id);
                Ok(())
            }
        }
    }

    async fn checkout_completed(&self, session: CheckoutSessionObject) -> Result<(), AppError> {
        let (Some(user_id), Some(customer_id)) =
            (metadata_user_id(&session.metadata), session.customer.as_deref())
        else {
            tracing::warn!("Checkout session completed without userId or customer");
            return Ok(());
        };

        let updated = UserRepository::new(self.db)
            .set_stripe_customer_id(user_id, customer_id)
            .await?;

        if updated == 0 {
            tracing::warn!("Checkout completed for unknown user {}", user_id);
        } else {
            tracing::info!("Checkout completed for user {}", user_id);
        }

        Ok(())
    }

    async fn subscription_updated(&self, subscription: SubscriptionObject) -> Result<(), AppError> {
        let Some(user_id) = self.resolve_user(&subscription).await? else {
            tracing::warn!(
                "Subscription {} has no userId and no linked customer",
                subscription.id
            );
            return Ok(());
        };

        let item = subscription.items.data.first();
        let price_id = item.and_then(|item| item.price.as_ref().map(|price| price.id.clone()));
        let plan = plan_for_price(self.config, price_id.as_deref());
        let status = map_stripe_status(&subscription.status);

        SubscriptionRepository::new(self.db)
            .upsert(UpsertSubscriptionParam {
                user_id,
                stripe_subscription_id: subscription.id,
                stripe_price_id: price_id,
                plan,
                status,
                current_period_start: item
                    .and_then(|item| item.current_period_start)
                    .and_then(from_unix),
                current_period_end: item
                    .and_then(|item| item.current_period_end)
                    .and_then(from_unix),
                cancel_at_period_end: subscription.cancel_at_period_end,
            })
            .await?;

        tracing::info!("Subscription updated for user {}: {} ({})", user_id, plan, status);

        Ok(())
    }

    async fn subscription_deleted(&self, subscription: SubscriptionObject) -> Result<(), AppError> {
        let repo = SubscriptionRepository::new(self.db);

        let updated = match metadata_user_id(&subscription.metadata) {
            Some(user_id) => {
                repo.set_status_by_user_id(user_id, SubscriptionStatus::Canceled)
                    .await?
            }
            None => {
                repo.set_status_by_stripe_id(&subscription.id, SubscriptionStatus::Canceled)
                    .await?
            }
        };

        tracing::info!(
            "Subscription {} canceled ({} rows)",
            subscription.id,
            updated
        );

        Ok(())
    }

    async fn payment_failed(&self, invoice: InvoiceObject) -> Result<(), AppError> {
        let Some(customer_id) = invoice.customer.as_deref() else {
            return Ok(());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_stripe_customer_id(customer_id)
            .await?
        else {
            tracing::warn!("Payment failed for unknown customer {}", customer_id);
            return Ok(());
        };

        SubscriptionRepository::new(self.db)
            .set_status_by_user_id(user.id, SubscriptionStatus::PastDue)
            .await?;

        tracing::info!("Payment failed for user {}", user.id);

        Ok(())
    }

    /// Finds the subscribing user from metadata, falling back to the linked customer.
    async fn resolve_user(&self, subscription: &SubscriptionObject) -> Result<Option<i32>, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(user_id) = metadata_user_id(&subscription.metadata) {
            if user_repo.find_by_id(user_id).await?.is_some() {
                return Ok(Some(user_id));
            }
        }

        let Some(customer_id) = subscription.customer.as_deref() else {
            return Ok(None);
        };

        let user = user_repo.find_by_stripe_customer_id(customer_id).await?;

        Ok(user.map(|user| user.id))
    }

    fn client(&self) -> Result<StripeClient<'a>, BillingError> {
        let secret_key = self
            .config
            .secret_key
            .as_deref()
            .ok_or(BillingError::NotConfigured)?;

        Ok(StripeClient::new(self.http_client, secret_key))
    }
}

/// Price id configured for a plan. The free plan has none.
pub fn price_for_plan(config: &StripeConfig, plan: Plan) -> Option<&str> {
    match plan {
        Plan::Free => None,
        Plan::Premium => config.premium_price_id.as_deref(),
        Plan::Enterprise => config.enterprise_price_id.as_deref(),
    }
}

/// Plan for a subscription's price id. Unrecognized prices are treated as premium.
pub fn plan_for_price(config: &StripeConfig, price_id: Option<&str>) -> Plan {
    let Some(price_id) = price_id else {
        return Plan::Free;
    };

    if config.enterprise_price_id.as_deref() == Some(price_id) {
        Plan::Enterprise
    } else {
        Plan::Premium
    }
}

/// Maps a Stripe subscription status onto the stored set.
pub fn map_stripe_status(status: &str) -> SubscriptionStatus {
    match status {
        "canceled" => SubscriptionStatus::Canceled,
        "past_due" => SubscriptionStatus::PastDue,
        "trialing" => SubscriptionStatus::Trialing,
        "incomplete" | "incomplete_expired" => SubscriptionStatus::Incomplete,
        _ => SubscriptionStatus::Active,
    }
}

fn object<T: DeserializeOwned>(event: &StripeEvent) -> Result<T, AppError> {
    serde_json::from_value(event.data.object.clone()).map_err(|err| {
        AppError::InternalError(format!(
            "Unreadable {} object in event {}: {}",
            event.event_type, event.id, err
        ))
    })
}

fn from_unix(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> StripeConfig {
        StripeConfig {
            secret_key: Some("sk_test".to_string()),
            webhook_secret: Some("whsec_test".to_string()),
            premium_price_id: Some("price_premium".to_string()),
            enterprise_price_id: Some("price_enterprise".to_string()),
        }
    }

    #[test]
    fn maps_prices_to_plans() {
        let config = config();

        assert_eq!(plan_for_price(&config, None), Plan::Free);
        assert_eq!(plan_for_price(&config, Some("price_premium")), Plan::Premium);
        assert_eq!(plan_for_price(&config, Some("price_enterprise")), Plan::Enterprise);
        assert_eq!(plan_for_price(&config, Some("price_legacy")), Plan::Premium);
    }

    #[test]
    fn only_paid_plans_have_prices() {
        let config = config();

        assert_eq!(price_for_plan(&config, Plan::Free), None);
        assert_eq!(price_for_plan(&config, Plan::Premium), Some("price_premium"));
        assert_eq!(
            price_for_plan(&StripeConfig::default(), Plan::Enterprise),
            None
        );
    }

    #[test]
    fn maps_stripe_statuses() {
        assert_eq!(map_stripe_status("active"), SubscriptionStatus::Active);
        assert_eq!(map_stripe_status("past_due"), SubscriptionStatus::PastDue);
        assert_eq!(
            map_stripe_status("incomplete_expired"),
            SubscriptionStatus::Incomplete
        );
        assert_eq!(map_stripe_status("unpaid"), SubscriptionStatus::Active);
    }
}
