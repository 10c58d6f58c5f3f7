pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_status_table;
mod m20261001_000003_create_severity_table;
mod m20261001_000004_create_app_table;
mod m20261001_000005_create_bug_table;
mod m20261001_000006_create_bug_status_table;
mod m20261001_000007_create_bug_severity_table;
mod m20261001_000008_create_bug_app_table;
mod m20261001_000009_create_comment_thread_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_status_table::Migration),
            Box::new(m20261001_000003_create_severity_table::Migration),
            Box::new(m20261001_000004_create_app_table::Migration),
            Box::new(m20261001_000005_create_bug_table::Migration),
            Box::new(m20261001_000006_create_bug_status_table::Migration),
            Box::new(m20261001_000007_create_bug_severity_table::Migration),
            Box::new(m20261001_000008_create_bug_app_table::Migration),
            Box::new(m20261001_000009_create_comment_thread_table::Migration),
        ]
    }
}
