use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Severity::Table)
                    .if_not_exists()
                    .col(pk_auto(Severity::Id))
                    .col(string_uniq(Severity::Level))
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert()
            .into_table(Severity::Table)
            .columns([Severity::Level])
            .to_owned();
        for level in ["low", "medium", "high", "critical"] {
            seed.values_panic([level.into()]);
        }
        manager.exec_stmt(seed).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Severity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Severity {
    Table,
    Id,
    Level,
}
