//! Comment thread data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::comment_thread::{Comment, CreateCommentParams};

pub struct CommentThreadRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentThreadRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a comment to a bug.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The inserted comment with its author's user name
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let comment = entity::comment_thread::ActiveModel {
            bug_id: ActiveValue::Set(params.bug_id),
            user_id: ActiveValue::Set(params.user_id),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let author = entity::prelude::User::find_by_id(comment.user_id)
            .one(self.db)
            .await?;

        Ok(Comment::from_entity(comment, author))
    }

    /// Gets a bug's comments with their authors, oldest first.
    ///
    /// # Arguments
    /// - `bug_id` - Bug whose thread is loaded
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments in posting order; empty if none
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_bug_id(&self, bug_id: i32) -> Result<Vec<Comment>, DbErr> {
        let rows = entity::prelude::CommentThread::find()
            .filter(entity::comment_thread::Column::BugId.eq(bug_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::comment_thread::Column::CreatedAt)
            .order_by_asc(entity::comment_thread::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, author)| Comment::from_entity(comment, author))
            .collect())
    }
}
