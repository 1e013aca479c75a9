//! Subscription factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subscriptions.
///
/// Defaults to an active premium subscription.
pub struct SubscriptionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    plan: String,
    status: String,
    stripe_subscription_id: Option<String>,
}

impl<'a> SubscriptionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            plan: "premium".to_string(),
            status: "active".to_string(),
            stripe_subscription_id: None,
        }
    }

    pub fn plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = plan.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn stripe_subscription_id(mut self, id: impl Into<String>) -> Self {
        self.stripe_subscription_id = Some(id.into());
        self
    }

    /// Builds and inserts the subscription entity into the database.
    pub async fn build(self) -> Result<entity::subscription::Model, DbErr> {
        let now = Utc::now();
        entity::subscription::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            stripe_subscription_id: ActiveValue::Set(self.stripe_subscription_id),
            stripe_price_id: ActiveValue::Set(None),
            plan: ActiveValue::Set(self.plan),
            status: ActiveValue::Set(self.status),
            current_period_start: ActiveValue::Set(None),
            current_period_end: ActiveValue::Set(None),
            cancel_at_period_end: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}
