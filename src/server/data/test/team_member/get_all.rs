use super::*;

/// Tests fetching the roster in display order.
///
/// Verifies that members come back sorted by ascending display order regardless of
/// the order they were stored in.
///
/// Expected: Ok with members ordered by display_order
#[tokio::test]
async fn returns_members_in_display_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rows(
            entity::team_member::TABLE,
            [
                TeamMemberFactory::new().name("Third").display_order(30).build(),
                TeamMemberFactory::new().name("First").display_order(1).build(),
                TeamMemberFactory::new().name("Second").display_order(7).build(),
            ],
        )
        .build()
        .await
        .unwrap();
    let store = store_client(&test);

    let members = TeamMemberRepository::new(&store).get_all().await?;

    let names: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["First", "Second", "Third"]);

    Ok(())
}

/// Tests that shared display orders keep the store's order.
///
/// Expected: Ok with tied members in insertion order
#[tokio::test]
async fn ties_keep_store_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rows(
            entity::team_member::TABLE,
            [
                TeamMemberFactory::new().name("Ash").display_order(2).build(),
                TeamMemberFactory::new().name("Bo").display_order(2).build(),
                TeamMemberFactory::new().name("Cy").display_order(1).build(),
            ],
        )
        .build()
        .await
        .unwrap();
    let store = store_client(&test);

    let members = TeamMemberRepository::new(&store).get_all().await?;

    let names: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Cy", "Ash", "Bo"]);

    Ok(())
}

/// Tests the request sent to the store.
///
/// Verifies the table path, query parameters and both authentication headers.
///
/// Expected: one GET with select=*, order=display_order.asc and no limit
#[tokio::test]
async fn sends_ordered_select_with_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = store_client(&test);

    TeamMemberRepository::new(&store).get_all().await?;

    let requests = test.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.table, "team_members");
    assert_eq!(request.query.get("select").map(String::as_str), Some("*"));
    assert_eq!(
        request.query.get("order").map(String::as_str),
        Some("display_order.asc")
    );
    assert!(!request.query.contains_key("limit"));
    assert_eq!(request.api_key.as_deref(), Some("test-anon-key"));
    assert_eq!(
        request.authorization.as_deref(),
        Some("Bearer test-anon-key")
    );

    Ok(())
}

/// Tests optional fields coming back as null.
///
/// Expected: Ok with None for avatar, bio and tag, Some where set
#[tokio::test]
async fn maps_optional_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rows(
            entity::team_member::TABLE,
            [
                TeamMemberFactory::new().display_order(1).build(),
                TeamMemberFactory::new()
                    .display_order(2)
                    .avatar_url("https://cdn.example/avatar.png")
                    .bio("Keeps the lights on")
                    .discord_tag("sparky")
                    .build(),
            ],
        )
        .build()
        .await
        .unwrap();
    let store = store_client(&test);

    let members = TeamMemberRepository::new(&store).get_all().await?;

    assert_eq!(members[0].avatar_url, None);
    assert_eq!(members[0].bio, None);
    assert_eq!(members[0].discord_tag, None);
    assert_eq!(
        members[1].avatar_url.as_deref(),
        Some("https://cdn.example/avatar.png")
    );
    assert_eq!(members[1].discord_tag.as_deref(), Some("sparky"));

    Ok(())
}

/// Tests an empty roster.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_roster() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let store = store_client(&test);

    let members = TeamMemberRepository::new(&store).get_all().await?;

    assert!(members.is_empty());

    Ok(())
}

/// Tests a store that refuses the query.
///
/// Expected: Err(StoreErr) carrying the store's status and message
#[tokio::test]
async fn surfaces_store_rejection() {
    let test = TestBuilder::new()
        .with_failure(
            entity::team_member::TABLE,
            StatusCode::NOT_FOUND,
            "relation \"public.team_members\" does not exist",
        )
        .build()
        .await
        .unwrap();
    let store = store_client(&test);

    let result = TeamMemberRepository::new(&store).get_all().await;

    match result {
        Err(AppError::StoreErr(err)) => {
            let message = err.to_string();
            assert!(message.contains("404"), "{message}");
            assert!(message.contains("does not exist"), "{message}");
        }
        other => panic!("expected store error, got {:?}", other.map(|m| m.len())),
    }
}

/// Tests a client configured with the wrong key.
///
/// Expected: Err(StoreErr) from the store's 401
#[tokio::test]
async fn wrong_api_key_is_refused() {
    let test = TestBuilder::new()
        .with_api_key("the-real-key")
        .build()
        .await
        .unwrap();
    let base_url = url::Url::parse(&test.base_url()).unwrap();
    let store = crate::server::store::StoreClient::new(
        reqwest::Client::new(),
        &base_url,
        "a-stale-key",
    )
    .unwrap();

    let result = TeamMemberRepository::new(&store).get_all().await;

    assert!(matches!(result, Err(AppError::StoreErr(_))));
}
