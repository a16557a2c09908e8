use thiserror::Error;

use crate::api::rates::{EndpointShape, RatesClient};
use crate::services::rate_table_service::DateDisplay;

const DEFAULT_ROWS_PER_PAGE: usize = 15;
const DEFAULT_TITLE: &str = "Exchange Rates";
const DEFAULT_FOOTER_OWNER: &str = "Taras Antoniuk";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Settings read from the environment (after `.env` is loaded)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub discord_token: String,
    pub api_base_url: String,
    pub endpoint: EndpointShape,
    pub date_display: DateDisplay,
    pub rows_per_page: usize,
    pub title: String,
    pub footer_owner: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let discord_token = get("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let mut endpoint = match get("RATES_ENDPOINT") {
            Some(raw) => raw
                .parse::<EndpointShape>()
                .map_err(|reason| ConfigError::Invalid { key: "RATES_ENDPOINT", reason })?,
            None => EndpointShape::default(),
        };

        if let Some(raw) = get("RATES_BASE_CURRENCY_ID") {
            let id = raw.trim().parse::<u32>().map_err(|e| ConfigError::Invalid {
                key: "RATES_BASE_CURRENCY_ID",
                reason: e.to_string(),
            })?;
            if let EndpointShape::Latest { currency_from_id } = &mut endpoint {
                *currency_from_id = id;
            }
        }

        let date_display = match get("RATES_DATE_DISPLAY") {
            Some(raw) => raw
                .parse::<DateDisplay>()
                .map_err(|reason| ConfigError::Invalid { key: "RATES_DATE_DISPLAY", reason })?,
            None => DateDisplay::default(),
        };

        let rows_per_page = match get("RATES_ROWS_PER_PAGE") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "RATES_ROWS_PER_PAGE",
                        reason: format!("expected a positive number, got '{}'", raw),
                    })
                }
            },
            None => DEFAULT_ROWS_PER_PAGE,
        };

        Ok(AppConfig {
            discord_token,
            api_base_url: get("RATES_API_BASE_URL").unwrap_or_else(|| RatesClient::DEFAULT_BASE_URL.to_string()),
            endpoint,
            date_display,
            rows_per_page,
            title: get("BOT_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            footer_owner: get("FOOTER_OWNER").unwrap_or_else(|| DEFAULT_FOOTER_OWNER.to_string()),
        })
    }
}
