use crate::server::{data::lookup::LookupRepository, model::lookup::CreateAppParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_app;
mod find_id;
mod get_all;
