use crate::error::ApiError;
use crate::transport::Transport;
use core_types::{DashboardOverview, DateRange, EquityPoint, HoldingPerformance, RecentSignal};
use serde::Serialize;
use std::sync::Arc;

/// Portfolio dashboard reads.
#[derive(Clone)]
pub struct DashboardClient {
    transport: Arc<Transport>,
}

impl DashboardClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// GET /dashboard/overview
    pub async fn overview(&self) -> Result<DashboardOverview, ApiError> {
        self.transport.get("/dashboard/overview").await
    }

    /// GET /dashboard/equity-curve
    pub async fn equity_curve(&self, range: &DateRange) -> Result<Vec<EquityPoint>, ApiError> {
        self.transport.get_query("/dashboard/equity-curve", range).await
    }

    /// GET /dashboard/signals
    pub async fn recent_signals(&self, limit: Option<u32>) -> Result<Vec<RecentSignal>, ApiError> {
        #[derive(Serialize)]
        struct Query {
            #[serde(skip_serializing_if = "Option::is_none")]
            limit: Option<u32>,
        }
        self.transport
            .get_query("/dashboard/signals", &Query { limit })
            .await
    }

    /// GET /dashboard/holdings
    pub async fn top_holdings(&self) -> Result<Vec<HoldingPerformance>, ApiError> {
        self.transport.get("/dashboard/holdings").await
    }
}
