pub mod investment;

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::store::repository::InvestmentRepository;

/// GET / - service info
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "FinPal API",
        "version": version,
        "description": "Read API for FinPal investment holdings and summary history",
        "endpoints": {
            "home": "/",
            "health": "/health",
            "detail": "POST /api/investment/detail",
            "user_detail": "POST /api/investment/user/detail",
            "summary_history": "POST /api/investment/summary/history",
        }
    }))
}

/// GET /health - store reachability probe
pub async fn health(State(repository): State<Arc<InvestmentRepository>>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match repository.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "store": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "store_error": e.to_string()
            })),
        ),
    }
}
