use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

use crate::store::document::Item;

/// One holding row, tagged by asset class.
///
/// Serializes untagged: the wire `details` array is a flat list whose
/// element shape follows the requested asset class. Fields absent in the raw
/// row are omitted from the output, never defaulted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Holding {
    Cash(CashHolding),
    FixedDeposit(FixedDepositHolding),
    RealEstate(RealEstateHolding),
    Gold(GoldHolding),
}

/// Bank-account balance row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashHolding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sk: Option<String>,
}

impl CashHolding {
    pub fn from_item(item: &Item) -> Self {
        Self {
            bank_name: string_field(item, "bank_name"),
            account_no: string_field(item, "account_no"),
            balance: decimal_field(item, "balance"),
            sk: string_field(item, "sk"),
        }
    }
}

/// Fixed-deposit row: principal, rate, and maturity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedDepositHolding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maturity_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sk: Option<String>,
}

impl FixedDepositHolding {
    pub fn from_item(item: &Item) -> Self {
        Self {
            bank: string_field(item, "bank"),
            amount: decimal_field(item, "amount"),
            rate: decimal_field(item, "rate"),
            maturity_date: string_field(item, "maturity_date"),
            investment_date: string_field(item, "investment_date"),
            sk: string_field(item, "sk"),
        }
    }
}

/// Property row: purchase price against current market price.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateHolding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sk: Option<String>,
}

impl RealEstateHolding {
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: string_field(item, "name"),
            buy_price: decimal_field(item, "buy_price"),
            market_price: decimal_field(item, "market_price"),
            sk: string_field(item, "sk"),
        }
    }
}

/// Gold row: form, weight, and prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldHolding {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub gold_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sk: Option<String>,
}

impl GoldHolding {
    pub fn from_item(item: &Item) -> Self {
        Self {
            gold_type: string_field(item, "type"),
            weight: decimal_field(item, "weight"),
            buy_price: decimal_field(item, "buy_price"),
            market_price: decimal_field(item, "market_price"),
            sk: string_field(item, "sk"),
        }
    }
}

pub(crate) fn string_field(item: &Item, key: &str) -> Option<String> {
    item.get(key).and_then(Value::as_str).map(str::to_string)
}

pub(crate) fn decimal_field(item: &Item, key: &str) -> Option<Decimal> {
    match item.get(key)? {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => Decimal::from_str(s).ok(),
        _ => None,
    }
}
