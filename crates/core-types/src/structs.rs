//! Typed response payloads for the endpoints whose shape the backend fixes.
//!
//! Open-ended analytics grids (factor matrices, experiment metrics, settings
//! blobs) stay as raw `serde_json::Value` at the call sites instead; the
//! structs here cover the payloads the terminal views render.

use crate::enums::SignalSide;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// GET /dashboard/overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub portfolio_value: f64,
    pub total_return: f64,
    #[serde(default)]
    pub sharpe_ratio: Option<f64>,
    #[serde(default)]
    pub max_drawdown: Option<f64>,
    #[serde(default)]
    pub active_models: Option<u32>,
}

/// One point of the portfolio equity curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityPoint {
    pub date: String,
    pub strategy: f64,
    #[serde(default)]
    pub benchmark: Option<f64>,
}

/// An entry in the recent-signals feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSignal {
    pub ticker: String,
    pub side: SignalSide,
    pub confidence: f64,
}

/// A row of the top-holdings performance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingPerformance {
    pub name: String,
    pub returns: f64,
    pub sharpe: f64,
    pub max_drawdown: f64,
}

/// One OHLCV bar of ticker price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBar {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Importance score for one model feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

/// A single-ticker directional prediction. Field names match the model
/// service verbatim (it predates the camelCase surface).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub ticker: String,
    pub as_of: String,
    pub prob_up: f64,
    #[serde(default)]
    pub features: serde_json::Value,
}

/// Information-coefficient decay over holding horizons, parallel arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecayCurve {
    pub horizons: Vec<u32>,
    pub ic: Vec<f64>,
}

/// Backtest summary metrics. The backend reports these under its own
/// capitalized names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestMetrics {
    #[serde(rename = "CAGR")]
    pub cagr: f64,
    #[serde(rename = "Sharpe")]
    pub sharpe: f64,
    #[serde(rename = "MaxDD")]
    pub max_dd: f64,
}

/// Backtest time series, parallel arrays keyed by `dates`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestSeries {
    pub dates: Vec<String>,
    pub equity: Vec<f64>,
    pub buy_hold: Vec<f64>,
}

/// The full payload of a completed backtest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestReport {
    pub metrics: BacktestMetrics,
    pub series: BacktestSeries,
}

/// Optimized portfolio allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioWeights {
    pub weights: BTreeMap<String, f64>,
    #[serde(default)]
    pub expected_return: Option<f64>,
    #[serde(default)]
    pub expected_risk: Option<f64>,
}

/// Value-at-risk for a portfolio at one confidence/horizon point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarResult {
    pub var: f64,
    pub confidence: f64,
    pub horizon: u32,
    #[serde(default)]
    pub expected_shortfall: Option<f64>,
}

/// Aggregated sentiment for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerSentiment {
    pub ticker: String,
    pub score: f64,
    #[serde(default)]
    pub headline_count: Option<u32>,
}

/// Health of one upstream data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceStatus {
    pub source: String,
    pub status: String,
    #[serde(default)]
    pub last_update: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_accepts_minimal_backend_payload() {
        // Scenario: backend reports only the two required figures.
        let overview: DashboardOverview =
            serde_json::from_str(r#"{"portfolioValue": 1245678, "totalReturn": 12.4}"#).unwrap();
        assert_eq!(overview.portfolio_value, 1_245_678.0);
        assert_eq!(overview.total_return, 12.4);
        assert!(overview.sharpe_ratio.is_none());
    }

    #[test]
    fn backtest_metrics_use_backend_capitalization() {
        let metrics: BacktestMetrics =
            serde_json::from_str(r#"{"CAGR": 0.185, "Sharpe": 1.82, "MaxDD": -0.083}"#).unwrap();
        assert_eq!(metrics.sharpe, 1.82);
    }

    #[test]
    fn prediction_result_keeps_model_service_field_names() {
        let raw = r#"{"ticker": "TSLA", "as_of": "2024-06-28", "prob_up": 0.61}"#;
        let prediction: PredictionResult = serde_json::from_str(raw).unwrap();
        assert_eq!(prediction.prob_up, 0.61);
        assert!(prediction.features.is_null());
    }
}
