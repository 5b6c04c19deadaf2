use crate::error::ApiError;
use crate::transport::{CallClass, Transport};
use core_types::{BacktestReport, CompareBacktestsRequest, RunBacktestRequest};
use serde_json::Value;
use std::sync::Arc;

/// Strategy backtesting.
#[derive(Clone)]
pub struct BacktestClient {
    transport: Arc<Transport>,
}

impl BacktestClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// POST /backtest/run. Simulates the full window server-side, so this
    /// uses the long-running budget.
    pub async fn run(&self, request: &RunBacktestRequest) -> Result<BacktestReport, ApiError> {
        self.transport
            .post("/backtest/run", request, CallClass::LongRunning)
            .await
    }

    /// GET /backtest/{id}
    pub async fn results(&self, backtest_id: &str) -> Result<BacktestReport, ApiError> {
        self.transport
            .get(&format!("/backtest/{backtest_id}"))
            .await
    }

    /// GET /backtest/history
    pub async fn history(&self) -> Result<Value, ApiError> {
        self.transport.get("/backtest/history").await
    }

    /// POST /backtest/compare
    pub async fn compare(&self, request: &CompareBacktestsRequest) -> Result<Value, ApiError> {
        self.transport
            .post("/backtest/compare", request, CallClass::Standard)
            .await
    }
}
