use super::*;

/// Tests loading a bug's thread with author names.
///
/// Verifies comments of other bugs are excluded and order is oldest first.
///
/// Expected: Ok with the bug's two comments in posting order
#[tokio::test]
async fn loads_thread_for_bug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, lookups, bug) = factory::helpers::create_bug_with_dependencies(db).await?;
    let other = factory::create_bug(db, user.id, &lookups).await?;

    let first = factory::create_comment(db, bug.id, user.id).await?;
    let second = factory::create_comment(db, bug.id, user.id).await?;
    factory::create_comment(db, other.id, user.id).await?;

    let thread = CommentThreadRepository::new(db)
        .get_by_bug_id(bug.id)
        .await?;

    assert_eq!(
        thread.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
    assert!(thread.iter().all(|c| c.user_name == user.user_name));

    Ok(())
}

/// Tests loading a thread with no comments.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_thread() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_user, _lookups, bug) = factory::helpers::create_bug_with_dependencies(db).await?;

    let thread = CommentThreadRepository::new(db)
        .get_by_bug_id(bug.id)
        .await?;

    assert!(thread.is_empty());

    Ok(())
}
