use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::{RateRecord, RateRow, RateView};
use crate::utils::Table;

pub const NO_DATA_MESSAGE: &str = "No currency rates available for the selected date.";

/// How the exchange date column is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateDisplay {
    /// Pass the API's ISO string through untouched
    #[default]
    Iso,
    /// `DD/MM/YYYY`
    DayMonthYear,
}

impl FromStr for DateDisplay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "iso" => Ok(DateDisplay::Iso),
            "dmy" | "dd/mm/yyyy" | "locale" => Ok(DateDisplay::DayMonthYear),
            other => Err(format!("unknown date display '{}', expected 'iso' or 'dmy'", other)),
        }
    }
}

impl fmt::Display for DateDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateDisplay::Iso => write!(f, "iso"),
            DateDisplay::DayMonthYear => write!(f, "dmy"),
        }
    }
}

fn round_half_up(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Format a rate with precision tiered by magnitude: 2 digits from 100 up,
/// 4 digits from 1 up, 6 digits below 1. Exact ties round away from zero.
pub fn format_rate(rate: f64) -> String {
    let digits = if rate >= 100.0 {
        2
    } else if rate >= 1.0 {
        4
    } else {
        6
    };
    format!("{:.*}", digits as usize, round_half_up(rate, digits))
}

/// Case-insensitive ordering; strings differing only in case put lowercase first
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

pub fn format_exchange_date(raw: &str, display: DateDisplay) -> String {
    match display {
        DateDisplay::Iso => raw.to_string(),
        DateDisplay::DayMonthYear => {
            let parsed = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .or_else(|| {
                    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                        .ok()
                        .map(|dt| dt.date())
                })
                .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));
            match parsed {
                Some(date) => date.format("%d/%m/%Y").to_string(),
                None => raw.to_string(),
            }
        }
    }
}

/// Sort records by currency code and format each into a display row
pub fn build_rows(records: &[RateRecord], display: DateDisplay) -> Vec<RateRow> {
    let mut sorted: Vec<&RateRecord> = records.iter().collect();
    sorted.sort_by(|a, b| locale_compare(&a.currency_to.code, &b.currency_to.code));

    sorted
        .into_iter()
        .map(|record| {
            let currency = &record.currency_to;
            RateRow {
                code: currency.code.clone(),
                name: currency.name.clone(),
                symbol: currency.symbol.clone().unwrap_or_default(),
                numeric_code: currency
                    .numeric_code
                    .as_ref()
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
                exchange_date: format_exchange_date(&record.exchange_date, display),
                rate: format_rate(record.rate),
            }
        })
        .collect()
}

/// Turn a response into the view to show. An empty response never yields a table.
pub fn render_rates(date: &str, records: &[RateRecord], display: DateDisplay) -> RateView {
    if records.is_empty() {
        return RateView::Error {
            message: NO_DATA_MESSAGE.to_string(),
        };
    }

    RateView::Table {
        date: date.to_string(),
        rows: build_rows(records, display),
    }
}

/// Lay rows out as text tables, `rows_per_page` rows each
pub fn build_table_pages(rows: &[RateRow], rows_per_page: usize) -> Vec<String> {
    let rows_per_page = rows_per_page.max(1);

    rows.chunks(rows_per_page)
        .map(|chunk| {
            let mut table = Table::new(vec!["Code", "Currency", "Num", "Date", "Rate"]).align_right(4);
            for row in chunk {
                let currency = if row.symbol.is_empty() {
                    row.name.clone()
                } else {
                    format!("{} ({})", row.name, row.symbol)
                };
                table.add_row(vec![
                    row.code.as_str(),
                    currency.as_str(),
                    row.numeric_code.as_str(),
                    row.exchange_date.as_str(),
                    row.rate.as_str(),
                ]);
            }
            table.render()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rate::{Currency, NumericCode};

    fn record(code: &str, rate: f64) -> RateRecord {
        RateRecord {
            currency_to: Currency {
                code: code.to_string(),
                name: format!("{} name", code),
                symbol: Some("$".to_string()),
                numeric_code: Some(NumericCode::Number(840)),
            },
            exchange_date: "2025-10-17".to_string(),
            rate,
        }
    }

    #[test]
    fn test_rate_precision_tiers() {
        assert_eq!(format_rate(150.5), "150.50");
        assert_eq!(format_rate(100.0), "100.00");
        assert_eq!(format_rate(4.2), "4.2000");
        assert_eq!(format_rate(1.0), "1.0000");
        assert_eq!(format_rate(0.0034), "0.003400");
    }

    #[test]
    fn test_rate_ties_round_up() {
        assert_eq!(format_rate(100.125), "100.13");
        assert_eq!(format_rate(1.03125), "1.0313");
    }

    #[test]
    fn test_rows_are_sorted_by_code() {
        let rows = build_rows(&[record("USD", 1.17), record("EUR", 1.0)], DateDisplay::Iso);
        let codes: Vec<&str> = rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["EUR", "USD"]);
    }

    #[test]
    fn test_sort_ignores_case_first() {
        assert_eq!(locale_compare("abc", "ABD"), Ordering::Less);
        assert_eq!(locale_compare("usd", "EUR"), Ordering::Greater);
        assert_eq!(locale_compare("usd", "USD"), Ordering::Less);
        assert_eq!(locale_compare("USD", "usd"), Ordering::Greater);
    }

    #[test]
    fn test_equal_codes_keep_input_order() {
        let mut first = record("USD", 1.1685);
        first.currency_to.name = "First".to_string();
        let mut second = record("USD", 1.2);
        second.currency_to.name = "Second".to_string();

        let rows = build_rows(&[first, record("EUR", 1.0), second], DateDisplay::Iso);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["EUR name", "First", "Second"]);
    }

    #[test]
    fn test_case_variants_order_does_not_depend_on_input() {
        let forward = build_rows(&[record("USD", 1.0), record("usd", 2.0)], DateDisplay::Iso);
        let backward = build_rows(&[record("usd", 2.0), record("USD", 1.0)], DateDisplay::Iso);

        let codes = |rows: &[RateRow]| rows.iter().map(|r| r.code.clone()).collect::<Vec<_>>();
        assert_eq!(codes(&forward), vec!["usd", "USD"]);
        assert_eq!(codes(&forward), codes(&backward));
    }

    #[test]
    fn test_empty_records_show_no_data_message() {
        let view = render_rates("2025-10-17", &[], DateDisplay::Iso);
        assert_eq!(view, RateView::Error { message: NO_DATA_MESSAGE.to_string() });
        assert!(!view.is_table());
    }

    #[test]
    fn test_row_fields() {
        let mut rec = record("GBP", 0.8712);
        rec.currency_to.symbol = None;
        rec.currency_to.numeric_code = Some(NumericCode::Text("826".to_string()));

        let rows = build_rows(&[rec], DateDisplay::DayMonthYear);
        assert_eq!(
            rows[0],
            RateRow {
                code: "GBP".to_string(),
                name: "GBP name".to_string(),
                symbol: String::new(),
                numeric_code: "826".to_string(),
                exchange_date: "17/10/2025".to_string(),
                rate: "0.871200".to_string(),
            }
        );
    }

    #[test]
    fn test_exchange_date_display() {
        assert_eq!(format_exchange_date("2025-10-17", DateDisplay::Iso), "2025-10-17");
        assert_eq!(format_exchange_date("2025-10-17T00:00:00", DateDisplay::DayMonthYear), "17/10/2025");
        assert_eq!(format_exchange_date("2025-10-17T00:00:00.000", DateDisplay::DayMonthYear), "17/10/2025");
        assert_eq!(format_exchange_date("2025-10-17T00:00:00.000Z", DateDisplay::DayMonthYear), "17/10/2025");
        assert_eq!(format_exchange_date("2025-10-17T08:30:00+02:00", DateDisplay::DayMonthYear), "17/10/2025");
        assert_eq!(format_exchange_date("yesterday", DateDisplay::DayMonthYear), "yesterday");
    }

    #[test]
    fn test_parse_date_display() {
        assert_eq!("dmy".parse::<DateDisplay>().unwrap(), DateDisplay::DayMonthYear);
        assert_eq!("ISO".parse::<DateDisplay>().unwrap(), DateDisplay::Iso);
        assert!("long".parse::<DateDisplay>().is_err());
    }

    #[test]
    fn test_table_pages_split_rows() {
        let records: Vec<RateRecord> = ["AUD", "CAD", "CHF", "JPY", "USD"]
            .iter()
            .map(|c| record(c, 1.5))
            .collect();
        let rows = build_rows(&records, DateDisplay::Iso);

        let pages = build_table_pages(&rows, 2);
        assert_eq!(pages.len(), 3);
        assert!(pages[0].contains("AUD") && pages[0].contains("CAD"));
        assert!(pages[2].contains("USD"));
        assert!(pages[2].contains("USD name ($)"));
        assert!(!pages[2].contains("AUD"));
    }
}
