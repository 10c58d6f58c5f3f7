//! Bug business logic: listing, reporting, editing, and lookup management.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        bug::{BugLinkIds, BugRepository},
        lookup::LookupRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        bug::{Bug, BugEdit, CreateBugParams, EditBugParams, STATUS_OPEN},
        lookup::{App, CreateAppParams, Lookups},
    },
};

/// Result of applying an edit request.
#[derive(Debug, Clone, PartialEq)]
pub struct EditedBug {
    /// Bug as stored after the edit, with its current labels.
    pub bug: Bug,
    /// Number of bug fields written. Zero means the bug row was not updated.
    pub fields_changed: usize,
    /// Number of join rows repointed.
    pub links_changed: usize,
}

pub struct BugService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BugService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every bug with its current labels, oldest first.
    pub async fn get_all(&self) -> Result<Vec<Bug>, AppError> {
        let repo = BugRepository::new(self.db);

        let rows = repo.find_all().await?;
        let mut linkages = repo.get_all_linkages().await?;

        let bugs = rows
            .into_iter()
            .filter_map(|row| match linkages.remove(&row.id) {
                Some(links) => Some(Bug::from_entity(row, links)),
                None => {
                    tracing::warn!("Bug {} is missing a status, app, or severity link", row.id);
                    None
                }
            })
            .collect();

        Ok(bugs)
    }

    /// Gets one bug with its current labels.
    ///
    /// # Returns
    /// - `Ok(Bug)` - The bug
    /// - `Err(AppError::NotFound)` - No bug with that id
    pub async fn get_by_id(&self, bug_id: i32) -> Result<Bug, AppError> {
        let repo = BugRepository::new(self.db);

        let Some(row) = repo.find_by_id(bug_id).await? else {
            return Err(bug_not_found(bug_id));
        };
        let linkages = repo.get_linkages(bug_id).await?;

        Ok(Bug::from_entity(row, linkages))
    }

    /// Reports a new bug with status `open`.
    ///
    /// The bug row and its three join rows are inserted in one transaction.
    ///
    /// # Returns
    /// - `Ok(Bug)` - The created bug
    /// - `Err(AppError::BadRequest)` - Unknown app or severity label
    /// - `Err(AppError::DbErr)` - Database error; nothing is written
    pub async fn create(&self, params: CreateBugParams) -> Result<Bug, AppError> {
        let txn = self.db.begin().await?;
        let lookup_repo = LookupRepository::new(&txn);

        let status_id = lookup_repo
            .find_status_id(STATUS_OPEN)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Status '{}' is not seeded", STATUS_OPEN))
            })?;
        let app_id = lookup_repo
            .find_app_id(&params.app)
            .await?
            .ok_or_else(|| unknown_label("app", &params.app))?;
        let severity_id = lookup_repo
            .find_severity_id(&params.severity)
            .await?
            .ok_or_else(|| unknown_label("severity", &params.severity))?;

        let bug_repo = BugRepository::new(&txn);
        let row = bug_repo
            .create(
                params,
                BugLinkIds {
                    status_id,
                    app_id,
                    severity_id,
                },
            )
            .await?;
        let linkages = bug_repo.get_linkages(row.id).await?;

        txn.commit().await?;

        tracing::info!("Bug {} reported by user {}", row.id, row.user_id);

        Ok(Bug::from_entity(row, linkages))
    }

    /// Applies an edit request to a bug.
    ///
    /// Diffs the request against the stored bug, writes the bug row only if a field
    /// changed, and repoints only the join rows whose label changed. All writes run in
    /// one transaction, so an unknown label leaves the bug untouched.
    ///
    /// # Arguments
    /// - `params` - Desired state of the bug
    ///
    /// # Returns
    /// - `Ok(EditedBug)` - The bug after the edit and the number of writes made
    /// - `Err(AppError::AuthErr(CompletionRequiresClosed))` - Notes given without closing
    /// - `Err(AppError::NotFound)` - No bug with that id
    /// - `Err(AppError::BadRequest)` - Unknown status, app, or severity label
    pub async fn edit(&self, params: EditBugParams) -> Result<EditedBug, AppError> {
        if params.completes_without_closing() {
            return Err(AuthError::CompletionRequiresClosed.into());
        }

        let txn = self.db.begin().await?;
        let bug_repo = BugRepository::new(&txn);
        let lookup_repo = LookupRepository::new(&txn);

        let Some(current) = bug_repo.find_by_id(params.bug_id).await? else {
            return Err(bug_not_found(params.bug_id));
        };
        let linkages = bug_repo.get_linkages(current.id).await?;

        let edit = BugEdit::plan(&params, &current, &linkages, Utc::now());

        if let Some(updated) = &edit.bug {
            bug_repo.update(updated.clone()).await?;
        }

        if let Some(status) = &edit.status {
            let status_id = lookup_repo
                .find_status_id(status)
                .await?
                .ok_or_else(|| unknown_label("status", status))?;
            bug_repo.set_status(current.id, status_id).await?;
        }

        if let Some(app) = &edit.app {
            let app_id = lookup_repo
                .find_app_id(app)
                .await?
                .ok_or_else(|| unknown_label("app", app))?;
            bug_repo.set_app(current.id, app_id).await?;
        }

        if let Some(severity) = &edit.severity {
            let severity_id = lookup_repo
                .find_severity_id(severity)
                .await?
                .ok_or_else(|| unknown_label("severity", severity))?;
            bug_repo.set_severity(current.id, severity_id).await?;
        }

        txn.commit().await?;

        tracing::debug!(
            "Bug {} edited: {} field(s), {} link(s) changed",
            current.id,
            edit.fields_changed,
            edit.links_changed()
        );

        let merged = edit.merged_linkages(&linkages);
        let links_changed = edit.links_changed();
        let row = edit.bug.unwrap_or(current);

        Ok(EditedBug {
            bug: Bug::from_entity(row, merged),
            fields_changed: edit.fields_changed,
            links_changed,
        })
    }

    /// Gets every status, severity, and app label.
    pub async fn get_lookups(&self) -> Result<Lookups, AppError> {
        let repo = LookupRepository::new(self.db);

        Ok(Lookups {
            statuses: repo.get_statuses().await?,
            severities: repo.get_severities().await?,
            apps: repo.get_apps().await?,
        })
    }

    /// Registers a new app bugs can be filed against.
    ///
    /// # Returns
    /// - `Ok(App)` - The created app
    /// - `Err(AppError::BadRequest)` - An app with that name already exists
    pub async fn create_app(&self, params: CreateAppParams) -> Result<App, AppError> {
        let repo = LookupRepository::new(self.db);

        let exists = format!("App '{}' already exists", params.app_name);

        if repo.find_app_id(&params.app_name).await?.is_some() {
            return Err(AppError::BadRequest(exists));
        }

        repo.create_app(params)
            .await
            .map_err(|err| AppError::from_unique_violation(err, exists))
    }
}

fn bug_not_found(bug_id: i32) -> AppError {
    AppError::NotFound(format!("Bug {} not found", bug_id))
}

fn unknown_label(kind: &str, label: &str) -> AppError {
    AppError::BadRequest(format!("Unknown {} '{}'", kind, label))
}
