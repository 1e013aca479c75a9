use chrono::{Duration, Utc};

use crate::{
    model::enums::LocationType,
    server::{data::job::JobRepository, error::AppError, model::job::JobFilter},
};
use test_utils::{builder::TestBuilder, factory};

mod get_visible;
