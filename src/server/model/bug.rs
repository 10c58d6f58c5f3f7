//! Bug domain models, parameters, and edit planning.
//!
//! A bug row carries only its descriptive fields; its current status, app, and severity
//! live in one join row each. `Bug` is the merged view of the row and its three labels,
//! and `BugEdit` computes which writes an edit request needs without touching the
//! database.

use chrono::{DateTime, Utc};

use crate::model::bug::{BugDto, CreateBugDto, EditBugDto};

/// Status given to every newly reported bug.
pub const STATUS_OPEN: &str = "open";

/// The only status under which completion notes may be recorded.
pub const STATUS_CLOSED: &str = "closed";

/// Current status, app, and severity labels of a bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BugLinkages {
    pub status: String,
    pub app: String,
    pub severity: String,
}

/// Bug merged with its current lookup labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Bug {
    pub id: i32,
    pub bug_name: String,
    pub description: String,
    /// Id of the user who reported the bug.
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub completed_notes: Option<String>,
    pub linkages: BugLinkages,
}

impl Bug {
    /// Flattens the bug into its public JSON shape.
    pub fn into_dto(self) -> BugDto {
        BugDto {
            id: self.id,
            bug_name: self.bug_name,
            description: self.description,
            status: self.linkages.status,
            app: self.linkages.app,
            severity: self.linkages.severity,
            user_id: self.user_id,
            created_at: self.created_at,
            completed_at: self.completed_at,
            completed_notes: self.completed_notes,
        }
    }

    /// Merges a bug row with its resolved labels.
    ///
    /// # Arguments
    /// - `entity` - The bug row
    /// - `linkages` - Labels resolved from the bug's join rows
    ///
    /// # Returns
    /// - `Bug` - The merged domain model
    pub fn from_entity(entity: entity::bug::Model, linkages: BugLinkages) -> Self {
        Self {
            id: entity.id,
            bug_name: entity.bug_name,
            description: entity.description,
            user_id: entity.user_id,
            created_at: entity.created_at,
            completed_at: entity.completed_at,
            completed_notes: entity.completed_notes,
            linkages,
        }
    }
}

/// Parameters for reporting a new bug. Status always starts as `open`.
#[derive(Debug, Clone)]
pub struct CreateBugParams {
    pub user_id: i32,
    pub bug_name: String,
    pub description: String,
    pub app: String,
    pub severity: String,
}

impl CreateBugParams {
    pub fn from_dto(user_id: i32, dto: CreateBugDto) -> Self {
        Self {
            user_id,
            bug_name: dto.bug_name,
            description: dto.description,
            app: dto.app,
            severity: dto.severity,
        }
    }
}

/// Desired state of a bug from an edit request.
#[derive(Debug, Clone)]
pub struct EditBugParams {
    pub bug_id: i32,
    pub bug_name: String,
    pub description: String,
    /// `None` leaves existing notes untouched. Empty strings are treated as absent.
    pub completed_notes: Option<String>,
    pub status: String,
    pub app: String,
    pub severity: String,
}

impl EditBugParams {
    pub fn from_dto(bug_id: i32, dto: EditBugDto) -> Self {
        Self {
            bug_id,
            bug_name: dto.bug_name,
            description: dto.description,
            completed_notes: dto.completed_notes.filter(|notes| !notes.trim().is_empty()),
            status: dto.status,
            app: dto.app,
            severity: dto.severity,
        }
    }

    /// Whether the request records completion notes without closing the bug.
    pub fn completes_without_closing(&self) -> bool {
        self.completed_notes.is_some() && self.status != STATUS_CLOSED
    }
}

/// Writes required to apply an edit request to a stored bug.
///
/// Built by [`BugEdit::plan`] from the stored row and labels. An unchanged request
/// produces a plan with no writes.
#[derive(Debug, Clone, PartialEq)]
pub struct BugEdit {
    /// Updated bug row, present only if at least one field differs.
    pub bug: Option<entity::bug::Model>,
    /// Number of bug fields that differ from the stored row.
    pub fields_changed: usize,
    /// New status label, if different from the current one.
    pub status: Option<String>,
    /// New app label, if different from the current one.
    pub app: Option<String>,
    /// New severity label, if different from the current one.
    pub severity: Option<String>,
}

impl BugEdit {
    /// Diffs an edit request against the stored bug and its labels.
    ///
    /// `bug_name` and `description` are compared directly. `completed_notes` only
    /// counts when supplied and different from the stored notes, in which case
    /// `completed_at` is stamped with `now`.
    ///
    /// # Arguments
    /// - `params` - Requested state
    /// - `current` - Stored bug row
    /// - `linkages` - Stored labels
    /// - `now` - Timestamp to record as completion time
    ///
    /// # Returns
    /// - `BugEdit` - The writes to perform
    pub fn plan(
        params: &EditBugParams,
        current: &entity::bug::Model,
        linkages: &BugLinkages,
        now: DateTime<Utc>,
    ) -> Self {
        let mut updated = current.clone();
        let mut fields_changed = 0;

        if params.bug_name != current.bug_name {
            updated.bug_name = params.bug_name.clone();
            fields_changed += 1;
        }

        if params.description != current.description {
            updated.description = params.description.clone();
            fields_changed += 1;
        }

        if let Some(notes) = &params.completed_notes {
            if current.completed_notes.as_ref() != Some(notes) {
                updated.completed_notes = Some(notes.clone());
                updated.completed_at = Some(now);
                fields_changed += 1;
            }
        }

        let changed_label = |requested: &String, current: &String| {
            (requested != current).then(|| requested.clone())
        };

        Self {
            bug: (fields_changed > 0).then_some(updated),
            fields_changed,
            status: changed_label(&params.status, &linkages.status),
            app: changed_label(&params.app, &linkages.app),
            severity: changed_label(&params.severity, &linkages.severity),
        }
    }

    /// Number of join rows the plan repoints.
    pub fn links_changed(&self) -> usize {
        [&self.status, &self.app, &self.severity]
            .iter()
            .filter(|label| label.is_some())
            .count()
    }

    /// Labels the bug carries once the plan is applied.
    pub fn merged_linkages(&self, current: &BugLinkages) -> BugLinkages {
        BugLinkages {
            status: self.status.clone().unwrap_or_else(|| current.status.clone()),
            app: self.app.clone().unwrap_or_else(|| current.app.clone()),
            severity: self
                .severity
                .clone()
                .unwrap_or_else(|| current.severity.clone()),
        }
    }
}
