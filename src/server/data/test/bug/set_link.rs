use super::*;

/// Tests repointing each join row.
///
/// Expected: each setter updates exactly one row and the labels follow
#[tokio::test]
async fn repoints_each_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, lookups, bug) = factory::helpers::create_bug_with_dependencies(db).await?;
    let mobile = factory::lookup::create_app(db, "mobile").await?;
    let other = factory::create_bug(db, user.id, &lookups).await?;

    let repo = BugRepository::new(db);
    assert_eq!(repo.set_status(bug.id, lookups.status_id("closed")).await?, 1);
    assert_eq!(repo.set_app(bug.id, mobile.id).await?, 1);
    assert_eq!(
        repo.set_severity(bug.id, lookups.severity_id("critical"))
            .await?,
        1
    );

    let linkages = repo.get_linkages(bug.id).await?;
    assert_eq!(linkages.status, "closed");
    assert_eq!(linkages.app, "mobile");
    assert_eq!(linkages.severity, "critical");

    let untouched = repo.get_linkages(other.id).await?;
    assert_eq!(untouched.status, "open");
    assert_eq!(untouched.app, "web");

    Ok(())
}
