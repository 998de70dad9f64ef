mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

use finpal_api::store::memory::MemoryStore;

const SUMMARY_HISTORY: &str = "/api/investment/summary/history";

#[tokio::test]
async fn history_is_returned_most_recent_first() -> Result<()> {
    let app = common::app_with_store(common::seeded_store());

    let (status, payload) =
        common::post_json(&app.router, SUMMARY_HISTORY, json!({ "username": "u1" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["username"], "u1");

    let history = payload["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["updatedAt"], "2026-07-31T00:00:00Z");
    assert_eq!(history[1]["updatedAt"], "2026-06-30T00:00:00Z");
    assert_eq!(history[0]["total"], json!(6443200.0));
    assert_eq!(history[0]["realEstate"], json!(6250000.0));
    Ok(())
}

#[tokio::test]
async fn history_is_capped_at_twelve_snapshots() -> Result<()> {
    let rows = (1..=15)
        .map(|day| {
            common::item(json!({
                "user_id": "u1",
                "sk": format!("2025-01-{:02}", day),
                "updated_at": format!("2025-01-{:02}T00:00:00Z", day),
                "total": day * 1000
            }))
        })
        .collect();
    let store = MemoryStore::new().with_table("fp_investment_summary", rows);
    let app = common::app_with_store(store);

    let (_, payload) =
        common::post_json(&app.router, SUMMARY_HISTORY, json!({ "username": "u1" })).await;

    let history = payload["history"].as_array().unwrap();
    assert_eq!(history.len(), 12);
    // Days 15 down to 4 survive the cap
    assert_eq!(history[0]["updatedAt"], "2025-01-15T00:00:00Z");
    assert_eq!(history[11]["updatedAt"], "2025-01-04T00:00:00Z");
    Ok(())
}

#[tokio::test]
async fn history_resorts_when_sort_key_disagrees_with_updated_at() -> Result<()> {
    // Sort key ascends while updated_at descends, so the store's descending
    // read yields ascending updated_at; the defensive re-sort flips it back.
    let rows = vec![
        common::item(json!({ "user_id": "u1", "sk": "a", "updated_at": "2026-03-01", "total": 3 })),
        common::item(json!({ "user_id": "u1", "sk": "b", "updated_at": "2026-02-01", "total": 2 })),
        common::item(json!({ "user_id": "u1", "sk": "c", "updated_at": "2026-01-01", "total": 1 })),
    ];
    let store = MemoryStore::new().with_table("fp_investment_summary", rows);
    let app = common::app_with_store(store);

    let (_, payload) =
        common::post_json(&app.router, SUMMARY_HISTORY, json!({ "username": "u1" })).await;

    let updated: Vec<_> = payload["history"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["updatedAt"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(updated, vec!["2026-03-01", "2026-02-01", "2026-01-01"]);
    Ok(())
}

#[tokio::test]
async fn missing_username_returns_empty_history_without_a_store_call() -> Result<()> {
    let app = common::app_with_store(common::seeded_store());

    let (status, payload) = common::post_json(&app.router, SUMMARY_HISTORY, json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["history"], json!([]));
    assert_eq!(app.store.query_calls(), 0);

    let (_, payload) =
        common::post_json(&app.router, SUMMARY_HISTORY, json!({ "username": "" })).await;
    assert_eq!(payload["history"], json!([]));
    assert_eq!(app.store.query_calls(), 0);
    Ok(())
}

#[tokio::test]
async fn store_failure_is_swallowed_into_an_empty_history() -> Result<()> {
    let app = common::app_with_store(common::seeded_store());
    app.store.fail_requests(true);

    let (status, payload) =
        common::post_json(&app.router, SUMMARY_HISTORY, json!({ "username": "u1" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload, json!({ "username": "u1", "history": [] }));
    assert_eq!(app.store.query_calls(), 1);
    Ok(())
}

#[tokio::test]
async fn unknown_user_has_no_history() -> Result<()> {
    let app = common::app_with_store(common::seeded_store());

    let (status, payload) =
        common::post_json(&app.router, SUMMARY_HISTORY, json!({ "username": "nobody" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["history"], json!([]));
    assert_eq!(app.store.query_calls(), 1);
    Ok(())
}
