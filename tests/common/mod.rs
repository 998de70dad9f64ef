#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use finpal_api::store::document::Item;
use finpal_api::store::memory::MemoryStore;
use finpal_api::store::repository::InvestmentRepository;

pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub router: Router,
}

pub fn app_with_store(store: MemoryStore) -> TestApp {
    let store = Arc::new(store);
    let repository = Arc::new(InvestmentRepository::new(store.clone()));
    TestApp {
        store: store.clone(),
        router: finpal_api::app(repository),
    }
}

pub fn item(value: Value) -> Item {
    value.as_object().cloned().expect("item literal must be an object")
}

/// Memory store seeded with a representative row set across all five tables.
/// Holding rows belong to users u1 and u2; summary rows are seeded in
/// ascending sort-key order for user u1.
pub fn seeded_store() -> MemoryStore {
    use serde_json::json;

    MemoryStore::new()
        .with_table(
            "fp_cash_investment",
            vec![
                item(json!({
                    "user_id": "u1", "sk": "cash#001",
                    "bank_name": "hdfc", "account_no": "XX1234", "balance": 25000.50
                })),
                item(json!({
                    "user_id": "u2", "sk": "cash#002",
                    "bank_name": "sbi", "account_no": "XX9876", "balance": 4800
                })),
            ],
        )
        .with_table(
            "fp_fd_investment",
            vec![item(json!({
                "user_id": "u1", "sk": "fd#001",
                "bank": "icici", "amount": 100000, "rate": 7.1,
                "maturity_date": "2027-03-31"
            }))],
        )
        .with_table(
            "fp_real_estate_investment",
            vec![item(json!({
                "user_id": "u1", "sk": "re#001",
                "name": "2bhk pune", "buy_price": 4500000, "market_price": 6200000
            }))],
        )
        .with_table(
            "fp_gold_investment",
            vec![item(json!({
                "user_id": "u2", "sk": "gold#001",
                "type": "coin", "weight": 10, "buy_price": 52000, "market_price": 61000
            }))],
        )
        .with_table(
            "fp_investment_summary",
            vec![
                item(json!({
                    "user_id": "u1", "sk": "2026-06", "updated_at": "2026-06-30T00:00:00Z",
                    "cash": 29800, "fd": 100000, "gold": 61000, "real_estate": 6200000,
                    "total": 6390800
                })),
                item(json!({
                    "user_id": "u1", "sk": "2026-07", "updated_at": "2026-07-31T00:00:00Z",
                    "cash": 30200, "fd": 100000, "gold": 63000, "real_estate": 6250000,
                    "total": 6443200
                })),
            ],
        )
}

pub async fn post_json(router: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    send(router, post_request(path, body.to_string())).await
}

/// POST a raw body, for exercising the JSON-string and empty-body cases.
pub async fn post_raw(router: &Router, path: &str, body: impl Into<String>) -> (StatusCode, Value) {
    send(router, post_request(path, body.into())).await
}

pub async fn get_path(router: &Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

fn post_request(path: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}
