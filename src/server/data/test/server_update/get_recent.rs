use super::*;

/// Tests fetching updates newest first.
///
/// Expected: Ok with updates ordered by published_at descending
#[tokio::test]
async fn returns_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rows(
            entity::server_update::TABLE,
            [
                ServerUpdateFactory::new().title("Middle").published_days_ago(5).build(),
                ServerUpdateFactory::new().title("Newest").published_days_ago(1).build(),
                ServerUpdateFactory::new().title("Oldest").published_days_ago(9).build(),
            ],
        )
        .build()
        .await
        .unwrap();
    let store = store_client(&test);

    let updates = ServerUpdateRepository::new(&store)
        .get_recent(GetRecentUpdatesParam { limit: 10 })
        .await?;

    let titles: Vec<_> = updates.iter().map(|u| u.title.as_str()).collect();
    assert_eq!(titles, ["Newest", "Middle", "Oldest"]);

    Ok(())
}

/// Tests the row cap.
///
/// Verifies that with more than ten updates stored only the ten most recent are
/// returned.
///
/// Expected: Ok with 10 updates, the oldest two left out
#[tokio::test]
async fn caps_to_limit() -> Result<(), AppError> {
    let rows: Vec<_> = (0..12)
        .map(|days| {
            ServerUpdateFactory::new()
                .title(&format!("{} days ago", days))
                .published_days_ago(days)
                .build()
        })
        .collect();
    let test = TestBuilder::new()
        .with_rows(entity::server_update::TABLE, rows)
        .build()
        .await
        .unwrap();
    let store = store_client(&test);

    let updates = ServerUpdateRepository::new(&store)
        .get_recent(GetRecentUpdatesParam { limit: 10 })
        .await?;

    assert_eq!(updates.len(), 10);
    assert_eq!(updates[0].title, "0 days ago");
    assert_eq!(updates[9].title, "9 days ago");

    let request = &test.requests()[0];
    assert_eq!(
        request.query.get("order").map(String::as_str),
        Some("published_at.desc")
    );
    assert_eq!(request.query.get("limit").map(String::as_str), Some("10"));

    Ok(())
}

/// Tests that unknown categories and embedded newlines pass through untouched.
///
/// Expected: Ok with the raw tag and description preserved
#[tokio::test]
async fn passes_rows_through_verbatim() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_rows(
            entity::server_update::TABLE,
            [ServerUpdateFactory::new()
                .update_type("event")
                .description("Car meet tonight.\n\nBring your own playlist.")
                .version("2.0")
                .build()],
        )
        .build()
        .await
        .unwrap();
    let store = store_client(&test);

    let updates = ServerUpdateRepository::new(&store)
        .get_recent(GetRecentUpdatesParam { limit: 10 })
        .await?;

    assert_eq!(updates[0].update_type, "event");
    assert_eq!(
        updates[0].description,
        "Car meet tonight.\n\nBring your own playlist."
    );
    assert_eq!(updates[0].version.as_deref(), Some("2.0"));

    Ok(())
}
