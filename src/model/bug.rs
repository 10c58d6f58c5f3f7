use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public shape of a bug with its current status, app, and severity labels.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BugDto {
    pub id: i32,
    pub bug_name: String,
    pub description: String,
    pub status: String,
    pub app: String,
    pub severity: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub completed_notes: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBugDto {
    pub bug_name: String,
    pub description: String,
    pub app: String,
    pub severity: String,
}

/// Body of `PATCH /api/bugs/{bug_id}`.
///
/// `status`, `app`, and `severity` are the desired labels; unchanged labels are
/// left alone. `completed_notes` is only accepted together with status `closed`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EditBugDto {
    pub bug_name: String,
    pub description: String,
    #[serde(default)]
    pub completed_notes: Option<String>,
    pub status: String,
    pub app: String,
    pub severity: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EditBugResponseDto {
    #[serde(rename = "editBug")]
    pub edit_bug: BugDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AppDto {
    pub id: i32,
    pub app_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateAppDto {
    pub app_name: String,
}

/// Labels accepted by the bug create and edit endpoints.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LookupsDto {
    pub statuses: Vec<String>,
    pub severities: Vec<String>,
    pub apps: Vec<AppDto>,
}
