use super::*;

/// Tests finding an existing bug.
///
/// Expected: Ok(Some) with matching row
#[tokio::test]
async fn finds_existing_bug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _lookups, bug) = factory::helpers::create_bug_with_dependencies(db).await?;

    let found = BugRepository::new(db).find_by_id(bug.id).await?;

    assert_eq!(found, Some(bug));

    Ok(())
}

/// Tests finding a bug that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_bug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = BugRepository::new(db).find_by_id(42).await?;

    assert!(found.is_none());

    Ok(())
}
