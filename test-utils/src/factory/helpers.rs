//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::lookup::Lookups;

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a bug along with everything it depends on.
///
/// This is a convenience method that creates:
/// 1. User (as bug reporter)
/// 2. Default lookups (statuses, severities, one app)
/// 3. Bug with status `open`, the default app, and severity `low`
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, lookups, bug))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_bug_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, Lookups, entity::bug::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let lookups = crate::factory::lookup::create_default_lookups(db).await?;
    let bug = crate::factory::bug::create_bug(db, user.id, &lookups).await?;

    Ok((user, lookups, bug))
}
