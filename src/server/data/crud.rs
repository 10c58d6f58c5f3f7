//! Generic query helpers shared by all repositories.
//!
//! `CrudRepository` works over any SeaORM entity and any connection, so the same helpers
//! run against the pool or inside a transaction.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, Value,
};

/// Join entity pinning a bug to one lookup row.
///
/// Implemented by the `bug_status`, `bug_app`, and `bug_severity` entities so their
/// single lookup column can be updated by bug id.
pub trait BugLinkEntity: EntityTrait {
    /// Column holding the owning bug's id.
    fn bug_id_column() -> Self::Column;
}

impl BugLinkEntity for entity::bug_status::Entity {
    fn bug_id_column() -> Self::Column {
        entity::bug_status::Column::BugId
    }
}

impl BugLinkEntity for entity::bug_app::Entity {
    fn bug_id_column() -> Self::Column {
        entity::bug_app::Column::BugId
    }
}

impl BugLinkEntity for entity::bug_severity::Entity {
    fn bug_id_column() -> Self::Column {
        entity::bug_severity::Column::BugId
    }
}

pub struct CrudRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CrudRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the first row whose column equals the given value.
    ///
    /// # Arguments
    /// - `column` - Column to compare
    /// - `value` - Value the column must equal
    ///
    /// # Returns
    /// - `Ok(Some(model))` - A matching row
    /// - `Ok(None)` - No row matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_field<E, V>(
        &self,
        column: E::Column,
        value: V,
    ) -> Result<Option<E::Model>, DbErr>
    where
        E: EntityTrait,
        V: Into<Value>,
    {
        E::find().filter(column.eq(value)).one(self.db).await
    }

    /// Writes the set fields of an active model to every row whose column equals the value.
    ///
    /// Fields left `NotSet` on the model are not written.
    ///
    /// # Arguments
    /// - `column` - Column to compare
    /// - `value` - Value the column must equal
    /// - `model` - Active model carrying the values to write
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_by_field<E, A, V>(
        &self,
        column: E::Column,
        value: V,
        model: A,
    ) -> Result<u64, DbErr>
    where
        E: EntityTrait,
        A: ActiveModelTrait<Entity = E>,
        V: Into<Value>,
    {
        let result = E::update_many()
            .set(model)
            .filter(column.eq(value))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets one column on the join row belonging to a bug.
    ///
    /// # Arguments
    /// - `field` - Column to write
    /// - `value` - New value for the column
    /// - `bug_id` - Bug whose join row is updated
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows updated (1 when the bug has its join row)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_field_by_bug_id<E, V>(
        &self,
        field: E::Column,
        value: V,
        bug_id: i32,
    ) -> Result<u64, DbErr>
    where
        E: BugLinkEntity,
        V: Into<Value>,
    {
        let result = E::update_many()
            .col_expr(field, Expr::value(value))
            .filter(E::bug_id_column().eq(bug_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
