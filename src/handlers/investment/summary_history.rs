use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::store::repository::InvestmentRepository;

use super::{parse_event_body, username_from};

/// POST /api/investment/summary/history - periodic summary snapshots for a
/// user, most recent first. Store failures surface as an empty history, not
/// an error response.
pub async fn summary_history(
    State(repository): State<Arc<InvestmentRepository>>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let event = parse_event_body(&body)?;
    let username = username_from(&event);

    let history = repository
        .get_investment_summary_history(username.as_deref())
        .await;
    Ok(Json(json!({ "username": username, "history": history })))
}
