//! Subscription data repository.
//!
//! Written only from the Stripe webhook handler and the admin setup action.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::{
    model::enums::SubscriptionStatus,
    server::{
        error::AppError,
        model::subscription::{Subscription, UpsertSubscriptionParam},
    },
};

/// Repository providing database operations for subscriptions.
pub struct SubscriptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionRepository<'a> {
    /// Creates a new SubscriptionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SubscriptionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user's subscription row.
    ///
    /// # Returns
    /// - `Ok(Some(Subscription))` - The user has a subscription row
    /// - `Ok(None)` - The user never subscribed
    /// - `Err(AppError)` - Database error or invalid stored value
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<Subscription>, AppError> {
        let entity = entity::prelude::Subscription::find_by_id(user_id)
            .one(self.db)
            .await?;

        entity.map(Subscription::from_entity).transpose()
    }

    /// Inserts or replaces a user's subscription with the state reported by Stripe.
    ///
    /// # Returns
    /// - `Ok(Subscription)` - The stored subscription
    /// - `Err(AppError)` - Database error or invalid stored value
    pub async fn upsert(&self, param: UpsertSubscriptionParam) -> Result<Subscription, AppError> {
        use entity::subscription::Column;

        let now = Utc::now();

        let entity = entity::prelude::Subscription::insert(entity::subscription::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            stripe_subscription_id: ActiveValue::Set(Some(param.stripe_subscription_id)),
            stripe_price_id: ActiveValue::Set(param.stripe_price_id),
            plan: ActiveValue::Set(param.plan.as_str().to_string()),
            status: ActiveValue::Set(param.status.as_str().to_string()),
            current_period_start: ActiveValue::Set(param.current_period_start),
            current_period_end: ActiveValue::Set(param.current_period_end),
            cancel_at_period_end: ActiveValue::Set(param.cancel_at_period_end),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(Column::UserId)
                .update_columns([
                    Column::StripeSubscriptionId,
                    Column::StripePriceId,
                    Column::Plan,
                    Column::Status,
                    Column::CurrentPeriodStart,
                    Column::CurrentPeriodEnd,
                    Column::CancelAtPeriodEnd,
                    Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Subscription::from_entity(entity)
    }

    /// Sets the status of the subscription with the given Stripe id.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated
    /// - `Err(AppError)` - Database error
    pub async fn set_status_by_stripe_id(
        &self,
        stripe_subscription_id: &str,
        status: SubscriptionStatus,
    ) -> Result<u64, AppError> {
        let result = entity::prelude::Subscription::update_many()
            .col_expr(
                entity::subscription::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(entity::subscription::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::subscription::Column::StripeSubscriptionId.eq(stripe_subscription_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets the status of a user's subscription.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 when the user has no subscription)
    /// - `Err(AppError)` - Database error
    pub async fn set_status_by_user_id(
        &self,
        user_id: i32,
        status: SubscriptionStatus,
    ) -> Result<u64, AppError> {
        let result = entity::prelude::Subscription::update_many()
            .col_expr(
                entity::subscription::Column::Status,
                Expr::value(status.as_str()),
            )
            .col_expr(entity::subscription::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::subscription::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
