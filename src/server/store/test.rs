use axum::http::StatusCode;
use serde::Deserialize;
use test_utils::builder::TestBuilder;
use url::Url;

use super::*;

#[derive(Debug, Deserialize, PartialEq)]
struct Row {
    id: String,
}

fn client(base: &str) -> StoreClient {
    StoreClient::new(reqwest::Client::new(), &Url::parse(base).unwrap(), "key").unwrap()
}

/// Tests endpoint construction from a bare project URL.
#[test]
fn builds_table_endpoint() {
    let endpoint = client("https://abc.supabase.co").endpoint("team_members").unwrap();

    assert_eq!(endpoint.as_str(), "https://abc.supabase.co/rest/v1/team_members");
}

/// Tests that a path prefix on the base URL is kept.
///
/// Expected: table path appended after the prefix, with or without trailing slash
#[test]
fn keeps_base_path_prefix() {
    for base in ["https://proxy.example/store", "https://proxy.example/store/"] {
        let endpoint = client(base).endpoint("server_updates").unwrap();

        assert_eq!(
            endpoint.as_str(),
            "https://proxy.example/store/rest/v1/server_updates"
        );
    }
}

/// Tests a base URL that cannot hold a path.
///
/// Expected: construction fails instead of every later request
#[test]
fn rejects_base_url_without_hierarchy() {
    for base in ["localhost:54321", "mailto:admin@example.com"] {
        let result = StoreClient::new(reqwest::Client::new(), &Url::parse(base).unwrap(), "key");

        assert!(
            matches!(result, Err(StoreError::BaseUrl { .. })),
            "base {base:?}"
        );
    }
}

/// Tests decoding rows from a select.
#[tokio::test]
async fn selects_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rows("things", [serde_json::json!({"id": "a"}), serde_json::json!({"id": "b"})])
        .build()
        .await
        .unwrap();
    let store = StoreClient::new(
        reqwest::Client::new(),
        &Url::parse(&test.base_url()).unwrap(),
        test.api_key.clone(),
    )
    .unwrap();

    let rows: Vec<Row> = store.select("things", &Select::all().limit(1)).await?;

    assert_eq!(rows, vec![Row { id: "a".to_string() }]);

    Ok(())
}

/// Tests that the store's JSON error message is extracted.
///
/// Expected: Err(StoreErr::Rejected) with status and message from the body
#[tokio::test]
async fn extracts_store_error_message() {
    let test = TestBuilder::new()
        .with_failure("things", StatusCode::FORBIDDEN, "permission denied for table things")
        .build()
        .await
        .unwrap();
    let store = StoreClient::new(
        reqwest::Client::new(),
        &Url::parse(&test.base_url()).unwrap(),
        test.api_key.clone(),
    )
    .unwrap();

    let result = store.insert("things", &[serde_json::json!({"id": "c"})]).await;

    match result {
        Err(AppError::StoreErr(StoreError::Rejected {
            table,
            operation,
            status,
            message,
        })) => {
            assert_eq!(table, "things");
            assert_eq!(operation, "insert");
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(message, "permission denied for table things");
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}
