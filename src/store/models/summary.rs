use rust_decimal::Decimal;
use serde::Serialize;

use crate::store::document::Item;
use crate::store::models::holding::{decimal_field, string_field};

/// Periodic portfolio-summary snapshot for one user: per-asset-class
/// subtotals and a total, stamped with the writer's last-update time.
/// Written by the summary job; this service only reads them back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarySnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fd: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_estate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
}

impl SummarySnapshot {
    pub fn from_item(item: &Item) -> Self {
        Self {
            username: string_field(item, "user_id"),
            updated_at: string_field(item, "updated_at"),
            cash: decimal_field(item, "cash"),
            fd: decimal_field(item, "fd"),
            gold: decimal_field(item, "gold"),
            real_estate: decimal_field(item, "real_estate"),
            total: decimal_field(item, "total"),
        }
    }
}
