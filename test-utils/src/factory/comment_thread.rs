//! Comment factory for creating test comment thread entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment on a bug authored by the given user.
///
/// The comment text is `"Comment {id}"` where id is auto-incremented.
///
/// # Arguments
/// - `db` - Database connection
/// - `bug_id` - Bug the comment belongs to
/// - `user_id` - Author of the comment
///
/// # Returns
/// - `Ok(entity::comment_thread::Model)` - Created comment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_comment(
    db: &DatabaseConnection,
    bug_id: i32,
    user_id: i32,
) -> Result<entity::comment_thread::Model, DbErr> {
    entity::comment_thread::ActiveModel {
        bug_id: ActiveValue::Set(bug_id),
        user_id: ActiveValue::Set(user_id),
        comment: ActiveValue::Set(format!("Comment {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
