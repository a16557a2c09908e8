//! Exchange rate models

use serde::Deserialize;
use std::fmt;

/// Target currency of a rate record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub numeric_code: Option<NumericCode>,
}

/// ISO 4217 numeric code; the API has sent both numbers and strings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericCode {
    Number(u32),
    Text(String),
}

impl fmt::Display for NumericCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericCode::Number(n) => write!(f, "{:03}", n),
            NumericCode::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One currency's rate against the fixed base currency (Euro)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRecord {
    pub currency_to: Currency,
    pub exchange_date: String,
    pub rate: f64,
}

/// A rate record formatted for the table
#[derive(Debug, Clone, PartialEq)]
pub struct RateRow {
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub numeric_code: String,
    pub exchange_date: String,
    pub rate: String,
}

/// What the rates message currently shows. Exactly one state is visible.
#[derive(Debug, Clone, PartialEq)]
pub enum RateView {
    Loading { date: String },
    Error { message: String },
    Table { date: String, rows: Vec<RateRow> },
}

impl RateView {
    pub fn is_table(&self) -> bool {
        matches!(self, RateView::Table { .. })
    }
}
