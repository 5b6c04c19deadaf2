use crate::error::ApiError;
use crate::transport::{CallClass, Transport};
use core_types::{AnalyzeSentimentRequest, ClassifyHeadlinesRequest, DateRange, HeadlineFilter, TickerSentiment};
use serde_json::Value;
use std::sync::Arc;

/// News-sentiment analytics.
#[derive(Clone)]
pub struct SentimentClient {
    transport: Arc<Transport>,
}

impl SentimentClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// POST /sentiment/analyze
    pub async fn analyze(
        &self,
        request: &AnalyzeSentimentRequest,
    ) -> Result<Vec<TickerSentiment>, ApiError> {
        self.transport
            .post("/sentiment/analyze", request, CallClass::Standard)
            .await
    }

    /// GET /sentiment/headlines
    pub async fn headlines(&self, filter: &HeadlineFilter) -> Result<Value, ApiError> {
        self.transport.get_query("/sentiment/headlines", filter).await
    }

    /// GET /sentiment/trends/{ticker}
    pub async fn trends(&self, ticker: &str, range: &DateRange) -> Result<Value, ApiError> {
        self.transport
            .get_query(&format!("/sentiment/trends/{ticker}"), range)
            .await
    }

    /// POST /sentiment/classify
    pub async fn classify(&self, request: &ClassifyHeadlinesRequest) -> Result<Value, ApiError> {
        self.transport
            .post("/sentiment/classify", request, CallClass::Standard)
            .await
    }
}
