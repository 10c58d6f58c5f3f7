use super::*;

/// Tests listing bugs and their labels.
///
/// Verifies bugs are returned in id order and that every bug has an entry in the
/// bulk label map.
///
/// Expected: Ok with both bugs and their labels
#[tokio::test]
async fn lists_bugs_with_linkages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let lookups = factory::create_default_lookups(db).await?;
    let first = factory::create_bug(db, user.id, &lookups).await?;
    let second = factory::bug::BugFactory::new(db, user.id, &lookups)
        .status("in progress")
        .severity("critical")
        .build()
        .await?;

    let repo = BugRepository::new(db);
    let bugs = repo.find_all().await?;
    let linkages = repo.get_all_linkages().await?;

    assert_eq!(
        bugs.iter().map(|b| b.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
    assert_eq!(linkages[&first.id].status, "open");
    assert_eq!(linkages[&second.id].status, "in progress");
    assert_eq!(linkages[&second.id].severity, "critical");
    assert_eq!(linkages[&second.id].app, "web");

    Ok(())
}

/// Tests listing with no bugs.
///
/// Expected: Ok with empty results
#[tokio::test]
async fn returns_empty_without_bugs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BugRepository::new(db);

    assert!(repo.find_all().await?.is_empty());
    assert!(repo.get_all_linkages().await?.is_empty());

    Ok(())
}
