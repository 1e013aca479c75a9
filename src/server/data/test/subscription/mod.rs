use chrono::{Duration, Utc};

use crate::{
    model::enums::{Plan, SubscriptionStatus},
    server::{
        data::subscription::SubscriptionRepository, error::AppError,
        model::subscription::UpsertSubscriptionParam,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod upsert;
