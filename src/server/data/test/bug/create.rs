use super::*;

/// Tests creating a bug with its three join rows.
///
/// Verifies that the repository inserts the bug row and links it to the given
/// status, app, and severity ids.
///
/// Expected: Ok with bug row, one join row of each kind
#[tokio::test]
async fn creates_bug_with_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let lookups = factory::create_default_lookups(db).await?;

    let repo = BugRepository::new(db);
    let bug = repo
        .create(
            CreateBugParams {
                user_id: user.id,
                bug_name: "Crash on login".to_string(),
                description: "App closes after entering password".to_string(),
                app: "web".to_string(),
                severity: "high".to_string(),
            },
            BugLinkIds {
                status_id: lookups.status_id("open"),
                app_id: lookups.app_id("web"),
                severity_id: lookups.severity_id("high"),
            },
        )
        .await?;

    assert_eq!(bug.bug_name, "Crash on login");
    assert_eq!(bug.user_id, user.id);
    assert!(bug.completed_at.is_none());
    assert!(bug.completed_notes.is_none());

    let status_links = entity::prelude::BugStatus::find()
        .filter(entity::bug_status::Column::BugId.eq(bug.id))
        .count(db)
        .await?;
    let severity = entity::prelude::BugSeverity::find()
        .filter(entity::bug_severity::Column::BugId.eq(bug.id))
        .one(db)
        .await?
        .unwrap();

    assert_eq!(status_links, 1);
    assert_eq!(severity.severity_id, lookups.severity_id("high"));

    Ok(())
}

/// Tests that creation fails for a nonexistent reporter.
///
/// Verifies the foreign key from bug to user is enforced.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let lookups = factory::create_default_lookups(db).await?;

    let result = BugRepository::new(db)
        .create(
            CreateBugParams {
                user_id: 999,
                bug_name: "Orphan".to_string(),
                description: "No reporter".to_string(),
                app: "web".to_string(),
                severity: "low".to_string(),
            },
            BugLinkIds {
                status_id: lookups.status_id("open"),
                app_id: lookups.app_id("web"),
                severity_id: lookups.severity_id("low"),
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
