use super::*;

/// Tests registering a new app.
///
/// Expected: Ok with the stored app
#[tokio::test]
async fn creates_app() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lookup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LookupRepository::new(db);
    let app = repo
        .create_app(CreateAppParams {
            app_name: "mobile".to_string(),
        })
        .await?;

    assert_eq!(app.app_name, "mobile");
    assert_eq!(repo.find_app_id("mobile").await?, Some(app.id));

    Ok(())
}

/// Tests that app names are unique.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_app() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lookup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::lookup::create_app(db, "mobile").await?;

    let result = LookupRepository::new(db)
        .create_app(CreateAppParams {
            app_name: "mobile".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
