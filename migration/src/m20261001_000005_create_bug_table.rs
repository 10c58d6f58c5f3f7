use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bug::Table)
                    .if_not_exists()
                    .col(pk_auto(Bug::Id))
                    .col(string(Bug::BugName))
                    .col(text(Bug::Description))
                    .col(integer(Bug::UserId))
                    .col(timestamp_with_time_zone(Bug::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp_with_time_zone_null(Bug::CompletedAt))
                    .col(text_null(Bug::CompletedNotes))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bug_user_id")
                            .from(Bug::Table, Bug::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bug::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bug {
    Table,
    Id,
    BugName,
    Description,
    UserId,
    CreatedAt,
    CompletedAt,
    CompletedNotes,
}
