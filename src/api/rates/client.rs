use reqwest::Client as HttpClient;
use serenity::async_trait;
use tracing::{debug, info, warn};

use super::models::{ApiError, EndpointShape};
use crate::models::RateRecord;

/// Anything that can supply the rate records for a canonical `YYYY-MM-DD` date
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn fetch_rates(&self, date: &str) -> Result<Vec<RateRecord>, ApiError>;
}

/// Exchange rates API client
#[derive(Debug, Clone)]
pub struct RatesClient {
    http_client: HttpClient,
    base_url: String,
    endpoint: EndpointShape,
}

impl RatesClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.tarasantoniuk.com/api/exchange-rates";

    /// Create a client for a base URL and endpoint shape
    pub fn with_base_url(base_url: String, endpoint: EndpointShape) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
            endpoint,
        }
    }

    /// Map a non-success response to an error, keeping the body text
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();
        warn!("Rates API returned {}: {}", status_code, body_text);

        match status_code {
            404 => ApiError::NotFound(body_text),
            500..=599 => ApiError::ServerError(status_code, body_text),
            _ => ApiError::HttpError(status_code, body_text),
        }
    }

    /// GET the rates for one date
    ///
    /// Issues a single request; there is no retry and no cancellation.
    pub async fn get_rates(&self, date: &str) -> Result<Vec<RateRecord>, ApiError> {
        let url = self.endpoint.url(&self.base_url, date);
        debug!("Fetching rates for date {} from {}", date, url);

        let response = self.http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        let status = response.status();
        debug!("Rates API response status: {}", status);

        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let records = response
            .json::<Vec<RateRecord>>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))?;

        info!("Received {} rates for {}", records.len(), date);
        Ok(records)
    }
}

#[async_trait]
impl RateSource for RatesClient {
    async fn fetch_rates(&self, date: &str) -> Result<Vec<RateRecord>, ApiError> {
        self.get_rates(date).await
    }
}
