use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000005_create_bug_table::Bug;
use super::m20261001_000004_create_app_table::App;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BugApp::Table)
                    .if_not_exists()
                    .col(pk_auto(BugApp::Id))
                    .col(integer_uniq(BugApp::BugId))
                    .col(integer(BugApp::AppId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bug_app_bug_id")
                            .from(BugApp::Table, BugApp::BugId)
                            .to(Bug::Table, Bug::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bug_app_app_id")
                            .from(BugApp::Table, BugApp::AppId)
                            .to(App::Table, App::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BugApp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BugApp {
    Table,
    Id,
    BugId,
    AppId,
}
