use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use crate::core::rates::{RateProvider, RateSnapshot};

/// Fetches latest rates from an ExchangeRate-API compatible endpoint:
/// `GET {base_url}/{api_key}/latest/{base}`.
pub struct ExchangeRateApiProvider {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("xconv/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: String,
    documentation: String,
    terms_of_use: String,
    time_last_update_unix: i64,
    time_last_update_utc: String,
    time_next_update_unix: i64,
    time_next_update_utc: String,
    base_code: String,
    conversion_rates: BTreeMap<String, f64>,
}

impl From<LatestRatesResponse> for RateSnapshot {
    fn from(data: LatestRatesResponse) -> Self {
        RateSnapshot {
            base_code: data.base_code,
            rates: data.conversion_rates,
            last_update_unix: data.time_last_update_unix,
            last_update_utc: data.time_last_update_utc,
            next_update_unix: data.time_next_update_unix,
            next_update_utc: data.time_next_update_utc,
            result: data.result,
            documentation: data.documentation,
            terms_of_use: data.terms_of_use,
        }
    }
}

// Error bodies look like {"result": "error", "error-type": "invalid-key"}
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    result: String,
    #[serde(rename = "error-type")]
    error_type: String,
}

fn api_error(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .filter(|e| e.result == "error")
        .map(|e| e.error_type)
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    #[instrument(
        name = "RatesFetch",
        skip(self),
        fields(base = %base)
    )]
    async fn latest(&self, base: &str) -> Result<RateSnapshot> {
        let url = format!("{}/{}/latest/{}", self.base_url, self.api_key, base);
        debug!("Requesting latest rates for {}", base);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {}", e.without_url()))?;

        let status = response.status();
        debug!(%status, "Received rates response");
        let text = response
            .text()
            .await
            .map_err(|e| anyhow!("Request error: {}", e.without_url()))?;

        if !status.is_success() {
            if let Some(error_type) = api_error(&text) {
                bail!(error_type);
            }
            bail!(
                status
                    .canonical_reason()
                    .map_or_else(|| status.as_str().to_string(), str::to_string)
            );
        }

        if let Some(error_type) = api_error(&text) {
            bail!(error_type);
        }

        let data: LatestRatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse rates response for {}: {}", base, e))?;

        debug!(rates = data.conversion_rates.len(), "Parsed rate snapshot");
        Ok(data.into())
    }
}
