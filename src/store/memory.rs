//! In-memory `DocumentStore` used by the test suites.
//!
//! Tables are seeded in ascending sort-key order; `query_desc` replays them
//! reversed, mirroring the store's descending sort-key reads. The store also
//! records how it was called so tests can assert on scan filters and call
//! counts, and can be switched into a failing mode.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::store::client::StoreError;
use crate::store::document::{AttributeEq, DocumentStore, Item};

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Item>>>,
    fail_requests: AtomicBool,
    scan_calls: AtomicUsize,
    query_calls: AtomicUsize,
    last_scan_table: Mutex<Option<String>>,
    last_scan_filter: Mutex<Option<Option<AttributeEq>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(self, name: &str, rows: Vec<Item>) -> Self {
        self.tables.lock().unwrap().insert(name.to_string(), rows);
        self
    }

    /// Make every subsequent store call fail.
    pub fn fail_requests(&self, fail: bool) {
        self.fail_requests.store(fail, Ordering::SeqCst);
    }

    pub fn scan_calls(&self) -> usize {
        self.scan_calls.load(Ordering::SeqCst)
    }

    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }

    /// Table name passed to the most recent scan, if any.
    pub fn last_scan_table(&self) -> Option<String> {
        self.last_scan_table.lock().unwrap().clone()
    }

    /// Filter passed to the most recent scan: `None` if no scan happened,
    /// `Some(None)` for an unfiltered scan.
    pub fn last_scan_filter(&self) -> Option<Option<AttributeEq>> {
        self.last_scan_filter.lock().unwrap().clone()
    }

    fn rows(&self, table: &str) -> Vec<Item> {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn scan(&self, table: &str, filter: Option<AttributeEq>) -> Result<Vec<Item>, StoreError> {
        self.scan_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_scan_table.lock().unwrap() = Some(table.to_string());
        *self.last_scan_filter.lock().unwrap() = Some(filter.clone());

        if self.fail_requests.load(Ordering::SeqCst) {
            return Err(StoreError::Scan {
                table: table.to_string(),
                message: "injected failure".to_string(),
            });
        }

        let rows = self.rows(table);
        Ok(match filter {
            Some(filter) => rows
                .into_iter()
                .filter(|item| {
                    item.get(&filter.name).and_then(Value::as_str) == Some(filter.value.as_str())
                })
                .collect(),
            None => rows,
        })
    }

    async fn query_desc(
        &self,
        table: &str,
        key: AttributeEq,
        limit: i32,
    ) -> Result<Vec<Item>, StoreError> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_requests.load(Ordering::SeqCst) {
            return Err(StoreError::Query {
                table: table.to_string(),
                message: "injected failure".to_string(),
            });
        }

        Ok(self
            .rows(table)
            .into_iter()
            .filter(|item| item.get(&key.name).and_then(Value::as_str) == Some(key.value.as_str()))
            .rev()
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.fail_requests.load(Ordering::SeqCst) {
            return Err(StoreError::Unreachable("injected failure".to_string()));
        }
        Ok(())
    }
}
