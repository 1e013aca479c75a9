use crate::{
    model::enums::IntroductionStatus,
    server::{
        data::introduction::IntroductionRepository, error::AppError,
        model::introduction::CreateIntroductionParam,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod get_received;
mod update_status;
