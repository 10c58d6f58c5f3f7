use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000005_create_bug_table::Bug;
use super::m20261001_000002_create_status_table::Status;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BugStatus::Table)
                    .if_not_exists()
                    .col(pk_auto(BugStatus::Id))
                    .col(integer_uniq(BugStatus::BugId))
                    .col(integer(BugStatus::StatusId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bug_status_bug_id")
                            .from(BugStatus::Table, BugStatus::BugId)
                            .to(Bug::Table, Bug::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bug_status_status_id")
                            .from(BugStatus::Table, BugStatus::StatusId)
                            .to(Status::Table, Status::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BugStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BugStatus {
    Table,
    Id,
    BugId,
    StatusId,
}
