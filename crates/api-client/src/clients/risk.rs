use crate::error::ApiError;
use crate::transport::{CallClass, Transport};
use core_types::{DateRange, FfExposureRequest, StressTestRequest, VarRequest, VarResult};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Risk analytics: VaR, stress tests, attribution, drawdowns, factor
/// exposures.
#[derive(Clone)]
pub struct RiskClient {
    transport: Arc<Transport>,
}

impl RiskClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// GET /risk/metrics
    pub async fn metrics(&self, portfolio_id: Option<&str>) -> Result<Value, ApiError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            portfolio_id: Option<&'a str>,
        }
        self.transport
            .get_query("/risk/metrics", &Query { portfolio_id })
            .await
    }

    /// POST /risk/var
    pub async fn var(&self, request: &VarRequest) -> Result<VarResult, ApiError> {
        self.transport
            .post("/risk/var", request, CallClass::Standard)
            .await
    }

    /// POST /risk/stress-test
    pub async fn stress_test(&self, request: &StressTestRequest) -> Result<Value, ApiError> {
        self.transport
            .post("/risk/stress-test", request, CallClass::Standard)
            .await
    }

    /// GET /risk/attribution/{portfolioId}
    pub async fn attribution(
        &self,
        portfolio_id: &str,
        range: &DateRange,
    ) -> Result<Value, ApiError> {
        self.transport
            .get_query(&format!("/risk/attribution/{portfolio_id}"), range)
            .await
    }

    /// GET /risk/drawdown/{portfolioId}
    pub async fn drawdown(&self, portfolio_id: &str) -> Result<Value, ApiError> {
        self.transport
            .get(&format!("/risk/drawdown/{portfolio_id}"))
            .await
    }

    /// POST /risk/ff-exposure. Fama-French factor loadings for a basket.
    pub async fn ff_exposure(&self, request: &FfExposureRequest) -> Result<Value, ApiError> {
        self.transport
            .post("/risk/ff-exposure", request, CallClass::Standard)
            .await
    }
}
