use crate::server::{
    data::comment_thread::CommentThreadRepository, model::comment_thread::CreateCommentParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_bug_id;
