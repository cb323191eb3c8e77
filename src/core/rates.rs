//! Exchange rate abstractions and core types

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Point-in-time rates relative to `base_code`. Received whole from a provider
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSnapshot {
    pub base_code: String,
    pub rates: BTreeMap<String, f64>,
    pub last_update_unix: i64,
    pub last_update_utc: String,
    pub next_update_unix: i64,
    pub next_update_utc: String,
    pub result: String,
    pub documentation: String,
    pub terms_of_use: String,
}

impl RateSnapshot {
    /// Rate for one unit of `base_code` expressed in `code`.
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.last_update_unix, 0).single()
    }

    pub fn next_update(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.next_update_unix, 0).single()
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetches the latest snapshot for `base`. One request per call, no retries.
    async fn latest(&self, base: &str) -> Result<RateSnapshot>;
}
