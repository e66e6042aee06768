//! Exchange Rates
//!
//! Local currency units per USD. The backend chain is
//! `/conversion-rate` → `/exchange-rate` → configured default, so these calls
//! never fail.

use std::collections::HashMap;

use serde::Deserialize;

use super::{ApiClient, ApiError, ApiResult};

#[derive(Debug, Default, Deserialize)]
struct RatePayload {
    #[serde(default)]
    rate: Option<f64>,
    #[serde(default)]
    data: Option<NestedRate>,
}

#[derive(Debug, Default, Deserialize)]
struct NestedRate {
    #[serde(default)]
    rate: Option<f64>,
}

impl RatePayload {
    fn rate(&self) -> Option<f64> {
        self.rate
            .or_else(|| self.data.as_ref().and_then(|d| d.rate))
            .filter(|r| r.is_finite() && *r > 0.0)
    }
}

#[derive(Debug, Deserialize)]
struct PublicRates {
    #[serde(default)]
    rates: HashMap<String, f64>,
}

impl ApiClient {
    async fn backend_rate(&self, path: &str) -> ApiResult<f64> {
        let envelope = self.get::<RatePayload>(path).await?;
        envelope
            .payload
            .rate()
            .ok_or_else(|| ApiError::Rejected(format!("{} returned no rate", path)))
    }

    /// Backend conversion rate with fallbacks
    pub async fn conversion_rate(&self) -> f64 {
        for path in ["conversion-rate", "exchange-rate"] {
            match self.backend_rate(path).await {
                Ok(rate) => return rate,
                Err(e) => tracing::warn!(path, error = %e, "conversion rate unavailable"),
            }
        }
        self.config().fallback_rate
    }

    /// Third-party public rate; falls back to [`ApiClient::conversion_rate`]
    pub async fn public_exchange_rate(&self) -> f64 {
        match self.fetch_public_rate().await {
            Ok(rate) => rate,
            Err(e) => {
                tracing::warn!(error = %e, "public exchange rate unavailable");
                self.conversion_rate().await
            }
        }
    }

    async fn fetch_public_rate(&self) -> ApiResult<f64> {
        let response = self.http().get(&self.config().rate_api).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: None,
            });
        }
        let table: PublicRates = serde_json::from_str(&response.text().await?)?;
        let currency = &self.config().local_currency;
        table
            .rates
            .get(currency)
            .copied()
            .filter(|r| r.is_finite() && *r > 0.0)
            .ok_or_else(|| ApiError::Rejected(format!("no {} rate in public table", currency)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_payload_shapes() {
        let flat: RatePayload = serde_json::from_str(r#"{"rate":15.5}"#).unwrap();
        assert_eq!(flat.rate(), Some(15.5));

        let nested: RatePayload = serde_json::from_str(r#"{"data":{"rate":14.0}}"#).unwrap();
        assert_eq!(nested.rate(), Some(14.0));

        let zero: RatePayload = serde_json::from_str(r#"{"rate":0}"#).unwrap();
        assert_eq!(zero.rate(), None);
    }
}
