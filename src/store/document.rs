use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::store::client::StoreError;

/// A raw row as returned by the document store: attribute name to JSON value.
pub type Item = Map<String, Value>;

/// Attribute-equality predicate. Used both as the post-read scan filter and
/// as the partition-key condition for queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeEq {
    pub name: String,
    pub value: String,
}

impl AttributeEq {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Read-side contract against the document store.
///
/// Exactly one store call per operation: no pagination follow-up, no retry.
/// A table with more matching rows than a single scan page returns is read
/// only up to what that one call yields.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Full-table scan with an optional attribute-equality filter. The
    /// filter discards rows after the read; it does not reduce read cost.
    async fn scan(&self, table: &str, filter: Option<AttributeEq>) -> Result<Vec<Item>, StoreError>;

    /// Partition-key query in descending sort-key order, capped at `limit`
    /// items.
    async fn query_desc(
        &self,
        table: &str,
        key: AttributeEq,
        limit: i32,
    ) -> Result<Vec<Item>, StoreError>;

    /// Cheap reachability probe for health reporting.
    async fn ping(&self) -> Result<(), StoreError>;
}
