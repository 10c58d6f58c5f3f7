use super::*;

/// Tests promoting the only registered user.
///
/// Expected: true and the stored flag set
#[tokio::test]
async fn promotes_first_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.promote_if_first(user.id).await?);

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert!(stored.dev);

    Ok(())
}

/// Tests two registrations racing, with the later one promoting first.
///
/// Expected: later user not promoted, earlier user still promoted
#[tokio::test]
async fn promotes_only_lowest_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(!repo.promote_if_first(second.id).await?);
    assert!(repo.promote_if_first(first.id).await?);

    assert!(!repo.find_by_id(second.id).await?.unwrap().dev);

    Ok(())
}
