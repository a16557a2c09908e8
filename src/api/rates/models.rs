use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Path shape of the rates endpoint. Both shapes take the canonical date in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointShape {
    /// `/latest/{date}?currencyFromId={id}`
    Latest { currency_from_id: u32 },
    /// `/date/{date}`
    ByDate,
}

impl EndpointShape {
    /// Euro's id on the rates API
    pub const EURO_ID: u32 = 2;

    /// Build the request URL for a canonical `YYYY-MM-DD` date
    pub fn url(&self, base_url: &str, date: &str) -> String {
        let base_url = base_url.trim_end_matches('/');
        match self {
            EndpointShape::Latest { currency_from_id } => {
                format!("{}/latest/{}?currencyFromId={}", base_url, date, currency_from_id)
            }
            EndpointShape::ByDate => format!("{}/date/{}", base_url, date),
        }
    }
}

impl Default for EndpointShape {
    fn default() -> Self {
        EndpointShape::Latest { currency_from_id: Self::EURO_ID }
    }
}

impl fmt::Display for EndpointShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointShape::Latest { .. } => write!(f, "latest"),
            EndpointShape::ByDate => write!(f, "date"),
        }
    }
}

impl FromStr for EndpointShape {
    type Err = String;

    /// Parses `latest` or `date`; the base currency id is set separately
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "latest" => Ok(EndpointShape::default()),
            "date" | "bydate" | "by_date" => Ok(EndpointShape::ByDate),
            other => Err(format!("unknown endpoint shape '{}', expected 'latest' or 'date'", other)),
        }
    }
}

fn with_body(body: &str) -> String {
    if body.trim().is_empty() {
        String::new()
    } else {
        format!(" ({})", body.trim())
    }
}

/// Error type for rates API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// 404 Not Found
    #[error("HTTP error! status: 404{}", with_body(.0))]
    NotFound(String),
    /// 5xx Server Error
    #[error("HTTP error! status: {0}{}", with_body(.1))]
    ServerError(u16, String),
    /// Other non-success statuses
    #[error("HTTP error! status: {0}{}", with_body(.1))]
    HttpError(u16, String),
    /// Network/request error
    #[error("{0}")]
    RequestError(String),
    /// Response body was not a rates array
    #[error("{0}")]
    DeserializationError(String),
}

impl ApiError {
    /// HTTP status that produced this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound(_) => Some(404),
            ApiError::ServerError(code, _) | ApiError::HttpError(code, _) => Some(*code),
            ApiError::RequestError(_) | ApiError::DeserializationError(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_url_carries_base_currency() {
        let url = EndpointShape::default().url("https://example.test/api/exchange-rates/", "2025-10-17");
        assert_eq!(url, "https://example.test/api/exchange-rates/latest/2025-10-17?currencyFromId=2");
    }

    #[test]
    fn test_by_date_url() {
        let url = EndpointShape::ByDate.url("https://example.test/api", "2025-10-17");
        assert_eq!(url, "https://example.test/api/date/2025-10-17");
    }

    #[test]
    fn test_parse_endpoint_shape() {
        assert_eq!("latest".parse::<EndpointShape>().unwrap(), EndpointShape::default());
        assert_eq!(" DATE ".parse::<EndpointShape>().unwrap(), EndpointShape::ByDate);
        assert!("weekly".parse::<EndpointShape>().is_err());
    }

    #[test]
    fn test_http_error_message_includes_status_and_body() {
        let err = ApiError::ServerError(500, "boom".to_string());
        assert_eq!(err.to_string(), "HTTP error! status: 500 (boom)");
        assert_eq!(err.status(), Some(500));

        let err = ApiError::HttpError(418, String::new());
        assert_eq!(err.to_string(), "HTTP error! status: 418");
    }
}
