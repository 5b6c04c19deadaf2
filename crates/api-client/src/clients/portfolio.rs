use crate::error::ApiError;
use crate::transport::{CallClass, Transport};
use core_types::{OptimizePortfolioRequest, PortfolioWeights};
use serde_json::Value;
use std::sync::Arc;

/// Portfolio construction and maintenance.
#[derive(Clone)]
pub struct PortfolioClient {
    transport: Arc<Transport>,
}

impl PortfolioClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// POST /portfolio/optimize. Covariance estimation over the full
    /// history can take a while, long-running budget.
    pub async fn optimize(
        &self,
        request: &OptimizePortfolioRequest,
    ) -> Result<PortfolioWeights, ApiError> {
        self.transport
            .post("/portfolio/optimize", request, CallClass::LongRunning)
            .await
    }

    /// GET /portfolio/{id}/analytics
    pub async fn analytics(&self, portfolio_id: &str) -> Result<Value, ApiError> {
        self.transport
            .get(&format!("/portfolio/{portfolio_id}/analytics"))
            .await
    }

    /// GET /portfolio
    pub async fn list(&self) -> Result<Value, ApiError> {
        self.transport.get("/portfolio").await
    }

    /// POST /portfolio/{id}/rebalance
    pub async fn rebalance(&self, portfolio_id: &str, payload: &Value) -> Result<Value, ApiError> {
        self.transport
            .post(
                &format!("/portfolio/{portfolio_id}/rebalance"),
                payload,
                CallClass::Standard,
            )
            .await
    }
}
