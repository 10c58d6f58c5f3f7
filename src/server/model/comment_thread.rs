//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::comment_thread::{CommentDto, CreateCommentDto};

/// A comment on a bug together with its author's user name.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub bug_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            bug_id: self.bug_id,
            user_id: self.user_id,
            user_name: self.user_name,
            comment: self.comment,
            created_at: self.created_at,
        }
    }

    /// Converts a comment row and its author at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The comment row
    /// - `author` - The author's user row, if it still exists
    ///
    /// # Returns
    /// - `Comment` - Domain model; author name is empty if the user row is missing
    pub fn from_entity(
        entity: entity::comment_thread::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            bug_id: entity.bug_id,
            user_id: entity.user_id,
            user_name: author.map(|u| u.user_name).unwrap_or_default(),
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for adding a comment to a bug.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub bug_id: i32,
    pub user_id: i32,
    pub comment: String,
}

impl CreateCommentParams {
    pub fn from_dto(user_id: i32, dto: CreateCommentDto) -> Self {
        Self {
            bug_id: dto.bug_id,
            user_id,
            comment: dto.comment,
        }
    }
}
