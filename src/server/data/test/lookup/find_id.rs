use super::*;

/// Tests resolving known labels to their ids.
///
/// Expected: Some(id) matching the seeded rows
#[tokio::test]
async fn resolves_known_labels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lookup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lookups = factory::create_default_lookups(db).await?;

    let repo = LookupRepository::new(db);

    assert_eq!(
        repo.find_status_id("in progress").await?,
        Some(lookups.status_id("in progress"))
    );
    assert_eq!(
        repo.find_severity_id("critical").await?,
        Some(lookups.severity_id("critical"))
    );
    assert_eq!(repo.find_app_id("web").await?, Some(lookups.app_id("web")));

    Ok(())
}

/// Tests resolving labels that were never created.
///
/// Expected: None for each lookup table
#[tokio::test]
async fn returns_none_for_unknown_labels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lookup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_default_lookups(db).await?;

    let repo = LookupRepository::new(db);

    assert_eq!(repo.find_status_id("reopened").await?, None);
    assert_eq!(repo.find_severity_id("blocker").await?, None);
    assert_eq!(repo.find_app_id("desktop").await?, None);

    Ok(())
}
