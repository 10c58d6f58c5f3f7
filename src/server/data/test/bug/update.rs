use super::*;

/// Tests persisting edited bug fields.
///
/// Verifies that name, description, and completion fields are written while the
/// reporter and creation time stay untouched.
///
/// Expected: Ok(1) and stored row matches the edited model
#[tokio::test]
async fn updates_editable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _lookups, bug) = factory::helpers::create_bug_with_dependencies(db).await?;

    let mut edited = bug.clone();
    edited.bug_name = "Renamed".to_string();
    edited.completed_notes = Some("fixed".to_string());
    edited.completed_at = Some(chrono::Utc::now());

    let repo = BugRepository::new(db);
    let rows = repo.update(edited.clone()).await?;
    let stored = repo.find_by_id(bug.id).await?.unwrap();

    assert_eq!(rows, 1);
    assert_eq!(stored.bug_name, "Renamed");
    assert_eq!(stored.description, bug.description);
    assert_eq!(stored.completed_notes.as_deref(), Some("fixed"));
    assert!(stored.completed_at.is_some());
    assert_eq!(stored.user_id, bug.user_id);
    assert_eq!(stored.created_at, bug.created_at);

    Ok(())
}

/// Tests updating a bug that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn updates_nothing_for_missing_bug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rows = BugRepository::new(db)
        .update(test_utils::fixture::bug::entity_builder().id(99).build())
        .await?;

    assert_eq!(rows, 0);

    Ok(())
}
