use super::*;

/// Tests finding a user by id.
///
/// Expected: Some for an existing id, None otherwise
#[tokio::test]
async fn finds_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.find_by_id(user.id).await?.map(|u| u.id), Some(user.id));
    assert!(repo.find_by_id(user.id + 100).await?.is_none());

    Ok(())
}

/// Tests loading credentials by user name.
///
/// Expected: the stored hash alongside the user
#[tokio::test]
async fn finds_credentials_by_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .user_name("grace")
        .password_hash("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (user, hash) = repo.find_credentials("grace").await?.unwrap();

    assert_eq!(user.user_name, "grace");
    assert_eq!(hash, "stored-hash");
    assert!(repo.find_credentials("nobody").await?.is_none());
    assert!(repo.user_name_exists("grace").await?);
    assert!(!repo.user_name_exists("nobody").await?);

    Ok(())
}
