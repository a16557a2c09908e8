//! Rate query models

use chrono::NaiveDate;

/// A validated calendar date to request exchange rates for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateQuery {
    pub date: NaiveDate,
}

impl RateQuery {
    pub fn new(date: NaiveDate) -> Self {
        RateQuery { date }
    }

    /// Wire format sent to the rates API: `YYYY-MM-DD`
    pub fn canonical(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// User-facing format: `DD/MM/YYYY`
    pub fn display(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}
