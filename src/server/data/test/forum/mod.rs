use crate::{
    model::enums::ForumCategory,
    server::{
        data::forum::ForumRepository,
        error::AppError,
        model::forum::{CreateReplyParam, CreateThreadParam, ThreadFilter},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create_reply;
mod get_threads;
