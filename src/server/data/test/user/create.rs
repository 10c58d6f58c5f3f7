use super::*;

/// Tests inserting a user.
///
/// Expected: Ok with stored fields and the given dev flag
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParams {
            user_name: "ada".to_string(),
            full_name: "Ada Lovelace".to_string(),
            password_hash: "hash".to_string(),
            dev: true,
        })
        .await?;

    assert_eq!(user.user_name, "ada");
    assert_eq!(user.full_name, "Ada Lovelace");
    assert!(user.dev);

    Ok(())
}

/// Tests that user names are unique.
///
/// Expected: Err(DbErr) for a taken name
#[tokio::test]
async fn rejects_duplicate_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .user_name("ada")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            user_name: "ada".to_string(),
            full_name: "Someone Else".to_string(),
            password_hash: "hash".to_string(),
            dev: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
