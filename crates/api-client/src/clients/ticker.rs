use crate::error::ApiError;
use crate::transport::Transport;
use core_types::{DateRange, PriceBar};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Single-name intelligence: quotes, history, derived metrics, search.
#[derive(Clone)]
pub struct TickerClient {
    transport: Arc<Transport>,
}

impl TickerClient {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// GET /tickers/{ticker}
    pub async fn data(&self, ticker: &str) -> Result<Value, ApiError> {
        self.transport.get(&format!("/tickers/{ticker}")).await
    }

    /// GET /tickers/{ticker}/history
    pub async fn history(&self, ticker: &str, range: &DateRange) -> Result<Vec<PriceBar>, ApiError> {
        self.transport
            .get_query(&format!("/tickers/{ticker}/history"), range)
            .await
    }

    /// GET /tickers/{ticker}/metrics
    pub async fn metrics(&self, ticker: &str) -> Result<Value, ApiError> {
        self.transport
            .get(&format!("/tickers/{ticker}/metrics"))
            .await
    }

    /// GET /tickers/search
    pub async fn search(&self, query: &str) -> Result<Value, ApiError> {
        #[derive(Serialize)]
        struct Query<'a> {
            q: &'a str,
        }
        self.transport
            .get_query("/tickers/search", &Query { q: query })
            .await
    }
}
