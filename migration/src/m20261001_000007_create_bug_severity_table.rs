use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000005_create_bug_table::Bug;
use super::m20261001_000003_create_severity_table::Severity;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BugSeverity::Table)
                    .if_not_exists()
                    .col(pk_auto(BugSeverity::Id))
                    .col(integer_uniq(BugSeverity::BugId))
                    .col(integer(BugSeverity::SeverityId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bug_severity_bug_id")
                            .from(BugSeverity::Table, BugSeverity::BugId)
                            .to(Bug::Table, Bug::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bug_severity_severity_id")
                            .from(BugSeverity::Table, BugSeverity::SeverityId)
                            .to(Severity::Table, Severity::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BugSeverity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BugSeverity {
    Table,
    Id,
    BugId,
    SeverityId,
}
