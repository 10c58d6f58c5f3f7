use crate::server::{
    data::bug::{BugLinkIds, BugRepository},
    model::bug::CreateBugParams,
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_all;
mod find_by_id;
mod get_linkages;
mod set_link;
mod update;
