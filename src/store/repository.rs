use std::cmp::Ordering;
use std::sync::Arc;

use serde_json::Value;

use crate::config;
use crate::store::client::StoreError;
use crate::store::document::{AttributeEq, DocumentStore, Item};
use crate::store::models::asset::AssetClass;
use crate::store::models::holding::{
    CashHolding, FixedDepositHolding, GoldHolding, Holding, RealEstateHolding,
};
use crate::store::models::summary::SummarySnapshot;

/// Read-side access to the investment holding tables and the summary
/// history table.
pub struct InvestmentRepository {
    store: Arc<dyn DocumentStore>,
}

impl InvestmentRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Holdings for one asset class, optionally restricted to a user.
    ///
    /// `asset_type` is the already upper-cased selector. An unrecognized
    /// selector falls back to the CASH table for the scan but reshapes to an
    /// empty list, so the scan result is discarded. Store errors propagate
    /// to the caller.
    pub async fn get_asset_details(
        &self,
        asset_type: &str,
        user_id: Option<&str>,
    ) -> Result<Vec<Holding>, StoreError> {
        let store_config = &config::config().store;
        let class = AssetClass::parse(asset_type);
        let table = class
            .map(|class| class.table(store_config))
            .unwrap_or(&store_config.cash_table);

        let filter = user_id
            .filter(|uid| !uid.is_empty())
            .map(|uid| AttributeEq::new("user_id", uid));
        let items = self.store.scan(table, filter).await?;

        Ok(match class {
            Some(AssetClass::Cash) => items
                .iter()
                .map(|item| Holding::Cash(CashHolding::from_item(item)))
                .collect(),
            Some(AssetClass::FixedDeposit) => items
                .iter()
                .map(|item| Holding::FixedDeposit(FixedDepositHolding::from_item(item)))
                .collect(),
            Some(AssetClass::RealEstate) => items
                .iter()
                .map(|item| Holding::RealEstate(RealEstateHolding::from_item(item)))
                .collect(),
            Some(AssetClass::Gold) => items
                .iter()
                .map(|item| Holding::Gold(GoldHolding::from_item(item)))
                .collect(),
            None => Vec::new(),
        })
    }

    /// Summary-snapshot history for a user, most recent first, at most the
    /// configured limit.
    ///
    /// A missing or empty user id returns an empty list without touching
    /// the store. Store errors are logged and swallowed into an empty list;
    /// callers cannot distinguish "no history" from a failed lookup.
    pub async fn get_investment_summary_history(
        &self,
        user_id: Option<&str>,
    ) -> Vec<SummarySnapshot> {
        let user_id = match user_id {
            Some(uid) if !uid.is_empty() => uid,
            _ => return Vec::new(),
        };

        let store_config = &config::config().store;
        let mut items = match self
            .store
            .query_desc(
                &store_config.summary_table,
                AttributeEq::new("user_id", user_id),
                store_config.summary_history_limit,
            )
            .await
        {
            Ok(items) => items,
            Err(err) => {
                tracing::error!("summary history lookup failed for {}: {}", user_id, err);
                return Vec::new();
            }
        };

        // The store orders by its own sort key; re-sort on updated_at in
        // case the two disagree. Items missing updated_at on either side
        // compare equal and keep their position (the sort is stable).
        items.sort_by(|a, b| match (updated_at(a), updated_at(b)) {
            (Some(left), Some(right)) => right.cmp(&left),
            _ => Ordering::Equal,
        });

        items.iter().map(SummarySnapshot::from_item).collect()
    }

    /// Reachability probe used by the health endpoint.
    pub async fn health_check(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}

fn updated_at(item: &Item) -> Option<&str> {
    item.get("updated_at").and_then(Value::as_str)
}
