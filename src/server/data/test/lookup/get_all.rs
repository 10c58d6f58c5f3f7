use super::*;

/// Tests listing all labels.
///
/// Verifies statuses and severities come back in seed order and apps by name.
///
/// Expected: Ok with every label
#[tokio::test]
async fn lists_labels_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_lookup_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_default_lookups(db).await?;
    factory::lookup::create_app(db, "api").await?;

    let repo = LookupRepository::new(db);

    assert_eq!(
        repo.get_statuses().await?,
        vec!["open", "in progress", "closed"]
    );
    assert_eq!(
        repo.get_severities().await?,
        vec!["low", "medium", "high", "critical"]
    );
    assert_eq!(
        repo.get_apps()
            .await?
            .into_iter()
            .map(|a| a.app_name)
            .collect::<Vec<_>>(),
        vec!["api", "web"]
    );

    Ok(())
}
