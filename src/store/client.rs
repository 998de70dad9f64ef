use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_json::{Number, Value};
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::store::document::{AttributeEq, DocumentStore, Item};

/// Errors from the document store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("scan on {table} failed: {message}")]
    Scan { table: String, message: String },

    #[error("query on {table} failed: {message}")]
    Query { table: String, message: String },

    #[error("store unreachable: {0}")]
    Unreachable(String),
}

/// DynamoDB-backed `DocumentStore`.
///
/// The SDK client is a connection/credentials holder with no request-scoped
/// state, shared process-wide and reused across invocations.
pub struct DynamoStore {
    client: Client,
}

static CLIENT: OnceCell<Client> = OnceCell::const_new();

impl DynamoStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Store backed by the process-wide client, created on first use from
    /// the configured region.
    pub async fn shared() -> Self {
        let client = CLIENT
            .get_or_init(|| async {
                let region = Region::new(crate::config::config().store.region.clone());
                let sdk_config = aws_config::defaults(BehaviorVersion::latest())
                    .region(region)
                    .load()
                    .await;
                Client::new(&sdk_config)
            })
            .await;
        Self::new(client.clone())
    }
}

#[async_trait]
impl DocumentStore for DynamoStore {
    async fn scan(&self, table: &str, filter: Option<AttributeEq>) -> Result<Vec<Item>, StoreError> {
        let mut request = self.client.scan().table_name(table);
        if let Some(filter) = filter {
            request = request
                .filter_expression("#attr = :value")
                .expression_attribute_names("#attr", filter.name)
                .expression_attribute_values(":value", AttributeValue::S(filter.value));
        }

        let output = request.send().await.map_err(|e| StoreError::Scan {
            table: table.to_string(),
            message: DisplayErrorContext(&e).to_string(),
        })?;

        Ok(output.items.unwrap_or_default().iter().map(item_to_json).collect())
    }

    async fn query_desc(
        &self,
        table: &str,
        key: AttributeEq,
        limit: i32,
    ) -> Result<Vec<Item>, StoreError> {
        let output = self
            .client
            .query()
            .table_name(table)
            .key_condition_expression("#key = :value")
            .expression_attribute_names("#key", key.name)
            .expression_attribute_values(":value", AttributeValue::S(key.value))
            .scan_index_forward(false)
            .limit(limit)
            .send()
            .await
            .map_err(|e| StoreError::Query {
                table: table.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(output.items.unwrap_or_default().iter().map(item_to_json).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .list_tables()
            .limit(1)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| StoreError::Unreachable(DisplayErrorContext(&e).to_string()))
    }
}

/// Convert one DynamoDB item into a plain JSON object map.
fn item_to_json(item: &HashMap<String, AttributeValue>) -> Item {
    item.iter()
        .map(|(name, value)| (name.clone(), attribute_to_json(value)))
        .collect()
}

fn attribute_to_json(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => number_to_json(n),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(list) => Value::Array(list.iter().map(attribute_to_json).collect()),
        AttributeValue::M(map) => Value::Object(
            map.iter()
                .map(|(name, value)| (name.clone(), attribute_to_json(value)))
                .collect(),
        ),
        AttributeValue::Ss(items) => {
            Value::Array(items.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::Ns(items) => Value::Array(items.iter().map(|n| number_to_json(n)).collect()),
        // Binary attributes carry no tracker data
        _ => Value::Null,
    }
}

fn number_to_json(raw: &str) -> Value {
    Number::from_str(raw)
        .map(Value::Number)
        .unwrap_or_else(|_| Value::String(raw.to_string()))
}
