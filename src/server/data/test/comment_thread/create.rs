use super::*;

/// Tests adding a comment to a bug.
///
/// Expected: Ok with the stored comment
#[tokio::test]
async fn creates_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bug_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (user, _lookups, bug) = factory::helpers::create_bug_with_dependencies(db).await?;

    let comment = CommentThreadRepository::new(db)
        .create(CreateCommentParams {
            bug_id: bug.id,
            user_id: user.id,
            comment: "Reproduced on Firefox".to_string(),
        })
        .await?;

    assert_eq!(comment.bug_id, bug.id);
    assert_eq!(comment.user_id, user.id);
    assert_eq!(comment.comment, "Reproduced on Firefox");
    assert_eq!(comment.user_name, user.user_name);

    Ok(())
}
