use super::*;

/// Tests granting and revoking the dev flag.
///
/// Expected: flag follows each call
#[tokio::test]
async fn toggles_dev_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert_eq!(repo.set_dev(user.id, true).await?, 1);
    assert!(repo.find_by_id(user.id).await?.unwrap().dev);

    assert_eq!(repo.set_dev(user.id, false).await?, 1);
    assert!(!repo.find_by_id(user.id).await?.unwrap().dev);

    Ok(())
}

/// Tests changing the flag of a missing user.
///
/// Expected: Ok(0)
#[tokio::test]
async fn updates_nothing_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert_eq!(UserRepository::new(db).set_dev(5, true).await?, 0);

    Ok(())
}
