use crate::error::ApiError;
use crate::transport::{CallClass, Transport};
use core_types::{DecayCurve, QuantileReturnsRequest, SignalDecayRequest, SignalFilter};
use serde_json::Value;
use std::sync::Arc;

/// Signal diagnostics: decay, quantile spreads, per-signal statistics.
#[derive(Clone)]
pub struct SignalClient {
    transport: Arc<Transport>,
}

impl SignalClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// GET /signals
    pub async fn list(&self, filter: &SignalFilter) -> Result<Value, ApiError> {
        self.transport.get_query("/signals", filter).await
    }

    /// POST /signals/decay
    pub async fn decay(&self, request: &SignalDecayRequest) -> Result<DecayCurve, ApiError> {
        self.transport
            .post("/signals/decay", request, CallClass::Standard)
            .await
    }

    /// POST /signals/quantile-returns
    pub async fn quantile_returns(
        &self,
        request: &QuantileReturnsRequest,
    ) -> Result<Value, ApiError> {
        self.transport
            .post("/signals/quantile-returns", request, CallClass::Standard)
            .await
    }

    /// GET /signals/{signalType}/stats
    pub async fn stats(&self, signal_type: &str) -> Result<Value, ApiError> {
        self.transport
            .get(&format!("/signals/{signal_type}/stats"))
            .await
    }
}
