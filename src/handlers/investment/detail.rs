use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::store::repository::InvestmentRepository;

use super::{asset_type_from, parse_event_body, username_from};

/// POST /api/investment/detail - holdings for one asset class
pub async fn detail(
    State(repository): State<Arc<InvestmentRepository>>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let event = parse_event_body(&body)?;
    let asset_type = asset_type_from(&event);

    let details = repository.get_asset_details(&asset_type, None).await?;
    Ok(Json(json!({ "assetType": asset_type, "details": details })))
}

/// POST /api/investment/user/detail - holdings for one asset class,
/// restricted to the named user's rows
pub async fn user_detail(
    State(repository): State<Arc<InvestmentRepository>>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let event = parse_event_body(&body)?;
    let asset_type = asset_type_from(&event);
    let username = username_from(&event);

    let details = repository
        .get_asset_details(&asset_type, username.as_deref())
        .await?;
    Ok(Json(json!({ "assetType": asset_type, "details": details })))
}
