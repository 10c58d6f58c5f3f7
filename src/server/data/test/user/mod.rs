use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod get_all;
mod promote_if_first;
mod set_dev;
