use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;
use super::m20261001_000005_create_bug_table::Bug;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommentThread::Table)
                    .if_not_exists()
                    .col(pk_auto(CommentThread::Id))
                    .col(integer(CommentThread::BugId))
                    .col(integer(CommentThread::UserId))
                    .col(text(CommentThread::Comment))
                    .col(
                        timestamp_with_time_zone(CommentThread::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_thread_bug_id")
                            .from(CommentThread::Table, CommentThread::BugId)
                            .to(Bug::Table, Bug::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_thread_user_id")
                            .from(CommentThread::Table, CommentThread::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_comment_thread_bug_id")
                            .col(CommentThread::BugId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommentThread::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommentThread {
    Table,
    Id,
    BugId,
    UserId,
    Comment,
    CreatedAt,
}
