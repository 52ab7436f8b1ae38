use super::*;

/// Tests inserting an application.
///
/// Verifies that exactly one row is inserted with the applicant's fields and the
/// agreement flag, and nothing the store assigns itself.
///
/// Expected: Ok with one stored row
#[tokio::test]
async fn inserts_one_row() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = store_client(&test);

    WhitelistApplicationRepository::new(&store)
        .create(param())
        .await?;

    let rows = test.rows(entity::whitelist_application::TABLE);
    assert_eq!(rows.len(), 1);
    let row = rows[0].as_object().unwrap();
    assert_eq!(row["discord_username"], "rizzo");
    assert_eq!(row["age"], 27);
    assert_eq!(
        row["character_story"],
        "Left Manchester in a hurry.\nNow lying low."
    );
    assert_eq!(row["rules_agreed"], true);
    assert!(!row.contains_key("id"));
    assert!(!row.contains_key("status"));
    assert_eq!(row.len(), 8);

    Ok(())
}

/// Tests the insert request sent to the store.
///
/// Expected: one POST asking for a minimal response, body an array of one row
#[tokio::test]
async fn sends_minimal_insert() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = store_client(&test);

    WhitelistApplicationRepository::new(&store)
        .create(param())
        .await?;

    let requests = test.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.table, "whitelist_applications");
    assert_eq!(request.prefer.as_deref(), Some("return=minimal"));
    assert_eq!(request.api_key.as_deref(), Some("test-anon-key"));
    assert_eq!(
        request.body.as_ref().and_then(|b| b.as_array()).map(Vec::len),
        Some(1)
    );

    Ok(())
}

/// Tests a store that refuses the insert.
///
/// Expected: Err(StoreErr) and no stored row
#[tokio::test]
async fn surfaces_rejected_insert() {
    let test = TestBuilder::new()
        .with_failure(
            entity::whitelist_application::TABLE,
            StatusCode::BAD_REQUEST,
            "new row violates check constraint \"age_check\"",
        )
        .build()
        .await
        .unwrap();
    let store = store_client(&test);

    let result = WhitelistApplicationRepository::new(&store)
        .create(param())
        .await;

    assert!(matches!(result, Err(AppError::StoreErr(_))));
    assert!(test.rows(entity::whitelist_application::TABLE).is_empty());
}

/// Tests a store that cannot be reached.
///
/// Expected: Err(ReqwestErr)
#[tokio::test]
async fn surfaces_unreachable_store() {
    // Nothing listens on port 1
    let base_url = url::Url::parse("http://127.0.0.1:1").unwrap();
    let store =
        crate::server::store::StoreClient::new(reqwest::Client::new(), &base_url, "any-key")
            .unwrap();

    let result = WhitelistApplicationRepository::new(&store)
        .create(param())
        .await;

    assert!(matches!(result, Err(AppError::ReqwestErr(_))));
}
