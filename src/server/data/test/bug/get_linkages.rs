use super::*;

/// Tests resolving a bug's labels through its join rows.
///
/// Expected: Ok with the labels the bug was created with
#[tokio::test]
async fn resolves_current_labels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let lookups = factory::create_default_lookups(db).await?;
    let bug = factory::bug::BugFactory::new(db, user.id, &lookups)
        .status("closed")
        .severity("medium")
        .build()
        .await?;

    let linkages = BugRepository::new(db).get_linkages(bug.id).await?;

    assert_eq!(linkages.status, "closed");
    assert_eq!(linkages.app, "web");
    assert_eq!(linkages.severity, "medium");

    Ok(())
}

/// Tests resolving labels for a bug without join rows.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_without_join_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BugRepository::new(db).get_linkages(7).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
