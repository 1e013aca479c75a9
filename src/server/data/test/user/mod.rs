use crate::server::{data::user::UserRepository, model::user::UpsertUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all_with_profiles;
mod set_stripe_customer_id;
mod upsert;
