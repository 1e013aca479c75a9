use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::enums::{Plan, SubscriptionStatus};

/// Checkout request; `plan` is validated server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CheckoutRequestDto {
    #[serde(default)]
    pub plan: String,
}

/// Hosted page the browser should be sent to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct RedirectUrlDto {
    pub url: String,
}

/// Effective subscription of the caller.
///
/// Anything other than an active subscription is reported as the free plan with
/// `status: null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDto {
    pub plan: Plan,
    pub status: Option<SubscriptionStatus>,
    pub is_premium: bool,
    pub current_period_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct WebhookAckDto {
    pub received: bool,
}
