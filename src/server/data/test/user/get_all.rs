use super::*;

/// Tests listing users ordered by user name.
///
/// Expected: Ok with users sorted alphabetically
#[tokio::test]
async fn lists_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for name in ["carol", "alice", "bob"] {
        factory::user::UserFactory::new(db)
            .user_name(name)
            .build()
            .await?;
    }

    let users = UserRepository::new(db).get_all().await?;

    assert_eq!(
        users.into_iter().map(|u| u.user_name).collect::<Vec<_>>(),
        vec!["alice", "bob", "carol"]
    );

    Ok(())
}
