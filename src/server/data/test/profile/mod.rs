use crate::{
    model::enums::Role,
    server::{
        data::profile::ProfileRepository,
        error::AppError,
        model::{
            member::MemberFilter,
            profile::{UpdateProfileFlagsParam, UpsertProfileParam},
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod find_approved;
mod update_flags;
mod upsert;
