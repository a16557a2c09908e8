//! Data models for the rates bot
//!
//! Query input, API records, display rows and the navigation menu tree.

pub mod menu;
pub mod query;
pub mod rate;

pub use menu::{MenuItem, SubMenuItem};
pub use query::RateQuery;
pub use rate::{RateRecord, RateRow, RateView};
