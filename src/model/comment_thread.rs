use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub bug_id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCommentDto {
    pub bug_id: i32,
    pub comment: String,
}
