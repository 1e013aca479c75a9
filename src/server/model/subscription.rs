//! Subscription domain model.
//!
//! Rows are written only by the Stripe webhook handler and the admin setup action.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        billing::SubscriptionDto,
        enums::{Plan, SubscriptionStatus},
    },
    server::{error::AppError, util::parse::parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub user_id: i32,
    pub stripe_subscription_id: Option<String>,
    pub stripe_price_id: Option<String>,
    pub plan: Plan,
    pub status: SubscriptionStatus,
    pub current_period_start: Option<DateTime<Utc>>,
    pub current_period_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
}

impl Subscription {
    pub fn from_entity(entity: entity::subscription::Model) -> Result<Self, AppError> {
        Ok(Self {
            user_id: entity.user_id,
            stripe_subscription_id: entity.stripe_subscription_id,
            stripe_price_id: entity.stripe_price_id,
            plan: parse_stored("subscription.plan", entity.plan, Plan::parse)?,
            status: parse_stored(
                "subscription.status",
                entity.status,
                SubscriptionStatus::parse,
            )?,
            current_period_start: entity.current_period_start,
            current_period_end: entity.current_period_end,
            cancel_at_period_end: entity.cancel_at_period_end,
        })
    }

    /// Reports the entitlement the caller actually has.
    ///
    /// Only an active subscription counts; everything else is the free plan with no
    /// status.
    pub fn effective_dto(subscription: Option<Subscription>) -> SubscriptionDto {
        match subscription {
            Some(sub) if sub.status == SubscriptionStatus::Active => SubscriptionDto {
                plan: sub.plan,
                status: Some(sub.status),
                is_premium: sub.plan.is_premium(),
                current_period_end: sub.current_period_end,
                cancel_at_period_end: sub.cancel_at_period_end,
            },
            _ => SubscriptionDto {
                plan: Plan::Free,
                status: None,
                is_premium: false,
                current_period_end: None,
                cancel_at_period_end: false,
            },
        }
    }
}

/// Full subscription state as reported by Stripe.
#[derive(Debug, Clone)]
pub struct UpsertSubscriptionParam {
    pub user_id: i32,
    pub stripe_subscription_id: String,
    pub stripe_price_id: Option<String>,
    pub plan: Plan,
    pub status: SubscriptionStatus,
    pub current_period_start: Option<DateTime<Utc>>,
    pub current_period_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscription(plan: Plan, status: SubscriptionStatus) -> Subscription {
        Subscription {
            user_id: 1,
            stripe_subscription_id: Some("sub_1".to_string()),
            stripe_price_id: None,
            plan,
            status,
            current_period_start: None,
            current_period_end: None,
            cancel_at_period_end: false,
        }
    }

    /// Expected: an active enterprise subscription grants premium
    #[test]
    fn active_enterprise_is_premium() {
        let dto = Subscription::effective_dto(Some(subscription(
            Plan::Enterprise,
            SubscriptionStatus::Active,
        )));
        assert_eq!(dto.plan, Plan::Enterprise);
        assert!(dto.is_premium);
    }

    /// Expected: a past-due premium subscription reports the free plan with no status
    #[test]
    fn inactive_subscription_reports_free() {
        let dto = Subscription::effective_dto(Some(subscription(
            Plan::Premium,
            SubscriptionStatus::PastDue,
        )));
        assert_eq!(dto.plan, Plan::Free);
        assert_eq!(dto.status, None);
        assert!(!dto.is_premium);
    }

    /// Expected: no row reports the free plan
    #[test]
    fn missing_subscription_reports_free() {
        let dto = Subscription::effective_dto(None);
        assert_eq!(dto.plan, Plan::Free);
        assert!(!dto.is_premium);
    }
}
