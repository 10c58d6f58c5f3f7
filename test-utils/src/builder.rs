use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Bug};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Bug)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the lookup tables a bug links to.
    ///
    /// Adds `Status`, `Severity` and `App`. The tables are empty; seed them with
    /// `factory::lookup::create_default_lookups` or the individual lookup factories.
    pub fn with_lookup_tables(self) -> Self {
        self.with_table(Status)
            .with_table(Severity)
            .with_table(App)
    }

    /// Adds every table required for bug operations.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - Status, Severity, App
    /// - Bug
    /// - BugStatus, BugSeverity, BugApp
    /// - CommentThread
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_bug_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_bug_tables(self) -> Self {
        self.with_table(User)
            .with_lookup_tables()
            .with_table(Bug)
            .with_table(BugStatus)
            .with_table(BugSeverity)
            .with_table(BugApp)
            .with_table(CommentThread)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
