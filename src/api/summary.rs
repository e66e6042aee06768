//! Aggregate Endpoints
//!
//! Server-side derived figures; read-only here.

use serde::Deserialize;

use super::{ApiClient, ApiResult};
use crate::models::{EarningsSummary, MonthlyEarning};

/// Figures under `data`, or flat beside `success`
#[derive(Debug, Default, Deserialize)]
struct SummaryPayload {
    #[serde(default)]
    data: Option<EarningsSummary>,
    #[serde(flatten)]
    top: EarningsSummary,
}

impl SummaryPayload {
    fn into_summary(self) -> EarningsSummary {
        self.data.unwrap_or(self.top)
    }
}

#[derive(Debug, Default, Deserialize)]
struct SeriesPayload {
    #[serde(alias = "months", alias = "monthlyEarnings", default)]
    data: Vec<MonthlyEarning>,
}

impl ApiClient {
    /// `GET /daily-earnings-and-orders`
    pub async fn daily_summary(&self) -> ApiResult<EarningsSummary> {
        Ok(self.get::<SummaryPayload>("daily-earnings-and-orders").await?.payload.into_summary())
    }

    /// `GET /monthly-earnings-and-orders`
    pub async fn monthly_summary(&self) -> ApiResult<EarningsSummary> {
        Ok(self.get::<SummaryPayload>("monthly-earnings-and-orders").await?.payload.into_summary())
    }

    /// `GET /weekly-orders`
    pub async fn weekly_summary(&self) -> ApiResult<EarningsSummary> {
        Ok(self.get::<SummaryPayload>("weekly-orders").await?.payload.into_summary())
    }

    /// `GET /month-by-month-earnings` (12 points, oldest first)
    pub async fn month_by_month(&self) -> ApiResult<Vec<MonthlyEarning>> {
        Ok(self.get::<SeriesPayload>("month-by-month-earnings").await?.payload.data)
    }
}
