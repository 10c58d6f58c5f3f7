//! Comment thread business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{bug::BugRepository, comment_thread::CommentThreadRepository},
    error::AppError,
    model::comment_thread::{Comment, CreateCommentParams},
};

pub struct CommentThreadService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentThreadService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a bug's comments, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - The thread, possibly empty
    /// - `Err(AppError::NotFound)` - No bug with that id
    pub async fn get_thread(&self, bug_id: i32) -> Result<Vec<Comment>, AppError> {
        self.ensure_bug_exists(bug_id).await?;

        let repo = CommentThreadRepository::new(self.db);

        Ok(repo.get_by_bug_id(bug_id).await?)
    }

    /// Adds a comment to a bug.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The stored comment
    /// - `Err(AppError::NotFound)` - No bug with that id
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        self.ensure_bug_exists(params.bug_id).await?;

        let repo = CommentThreadRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    async fn ensure_bug_exists(&self, bug_id: i32) -> Result<(), AppError> {
        match BugRepository::new(self.db).find_by_id(bug_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("Bug {} not found", bug_id))),
        }
    }
}
