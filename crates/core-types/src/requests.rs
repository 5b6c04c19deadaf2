//! Request bodies and query parameter sets for the research backend.
//!
//! Everything here serializes to the backend's camelCase wire names.
//! Optional members are omitted entirely when unset so the backend's own
//! defaulting applies.

use crate::enums::OptimizationMethod;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A start/end date window, used as query parameters by several endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self { start_date, end_date }
    }

    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}

/// Query filter for the signal list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
}

/// Query filter for the sentiment headline feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// POST /factors/compute
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeFactorsRequest {
    pub tickers: Vec<String>,
    pub factors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// POST /factors/pca
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PcaRequest {
    pub factors: Vec<String>,
}

/// POST /factors/correlation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationRequest {
    pub factors: Vec<String>,
}

/// The sliding in-sample/out-of-sample window for walk-forward training.
/// Passed through opaquely; the backend owns the semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkForwardParams {
    pub train_days: u32,
    pub test_days: u32,
    pub retrain_frequency: u32,
}

/// POST /models/train
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainModelRequest {
    pub name: String,
    pub factors: Vec<String>,
    pub tickers: Vec<String>,
    pub target: String,
    pub params: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walk_forward_params: Option<WalkForwardParams>,
}

/// POST /experiments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperimentRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub config: Value,
}

/// POST /experiments/compare
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareExperimentsRequest {
    pub experiment_ids: Vec<String>,
}

/// POST /signals/decay
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalDecayRequest {
    pub signal_type: String,
    pub horizons: Vec<u32>,
}

/// POST /signals/quantile-returns
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantileReturnsRequest {
    pub signal_type: String,
    pub quantiles: u32,
}

/// POST /backtest/run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunBacktestRequest {
    pub strategy: String,
    pub tickers: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_capital: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

/// POST /backtest/compare
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareBacktestsRequest {
    pub backtest_ids: Vec<String>,
}

/// POST /portfolio/optimize
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizePortfolioRequest {
    pub tickers: Vec<String>,
    pub method: OptimizationMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_return: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_risk: Option<f64>,
}

/// POST /risk/var
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarRequest {
    pub portfolio_id: String,
    pub confidence: f64,
    pub horizon: u32,
}

/// POST /risk/stress-test
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressTestRequest {
    pub portfolio_id: String,
    pub scenarios: Vec<String>,
}

/// POST /risk/ff-exposure. Fama-French factor loadings for a basket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FfExposureRequest {
    pub tickers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// POST /sentiment/analyze
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSentimentRequest {
    pub tickers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// POST /sentiment/classify
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyHeadlinesRequest {
    pub headlines: Vec<String>,
}

/// POST /data/refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshDataRequest {
    pub sources: Vec<String>,
}

/// POST /settings/test-connection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestConnectionRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub config: Value,
}
