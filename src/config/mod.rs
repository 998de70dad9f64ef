use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

/// Document-store settings: region, the four per-asset holding tables, and
/// the summary-history table with its fixed page size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub region: String,
    pub cash_table: String,
    pub fd_table: String,
    pub real_estate_table: String,
    pub gold_table: String,
    pub summary_table: String,
    pub summary_history_limit: i32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        Self {
            environment,
            store: StoreConfig::defaults(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("STORE_REGION") {
            self.store.region = v;
        }
        if let Ok(v) = env::var("STORE_CASH_TABLE") {
            self.store.cash_table = v;
        }
        if let Ok(v) = env::var("STORE_FD_TABLE") {
            self.store.fd_table = v;
        }
        if let Ok(v) = env::var("STORE_REAL_ESTATE_TABLE") {
            self.store.real_estate_table = v;
        }
        if let Ok(v) = env::var("STORE_GOLD_TABLE") {
            self.store.gold_table = v;
        }
        if let Ok(v) = env::var("STORE_SUMMARY_TABLE") {
            self.store.summary_table = v;
        }
        if let Ok(v) = env::var("STORE_SUMMARY_HISTORY_LIMIT") {
            self.store.summary_history_limit = v.parse().unwrap_or(self.store.summary_history_limit);
        }

        self
    }
}

impl StoreConfig {
    fn defaults() -> Self {
        Self {
            region: "ap-south-1".to_string(),
            cash_table: "fp_cash_investment".to_string(),
            fd_table: "fp_fd_investment".to_string(),
            real_estate_table: "fp_real_estate_investment".to_string(),
            gold_table: "fp_gold_investment".to_string(),
            summary_table: "fp_investment_summary".to_string(),
            summary_history_limit: 12,
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
