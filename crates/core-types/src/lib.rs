pub mod enums;
pub mod error;
pub mod requests;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{OptimizationMethod, SignalSide};
pub use error::CoreError;
pub use requests::{
    AnalyzeSentimentRequest, ClassifyHeadlinesRequest, CompareBacktestsRequest,
    CompareExperimentsRequest, ComputeFactorsRequest, CorrelationRequest, CreateExperimentRequest,
    DateRange, FfExposureRequest, HeadlineFilter, OptimizePortfolioRequest, PcaRequest,
    QuantileReturnsRequest, RefreshDataRequest, RunBacktestRequest, SignalDecayRequest,
    SignalFilter, StressTestRequest, TestConnectionRequest, TrainModelRequest, VarRequest,
    WalkForwardParams,
};
pub use structs::{
    BacktestMetrics, BacktestReport, BacktestSeries, DashboardOverview, DataSourceStatus,
    DecayCurve, EquityPoint, FeatureImportance, HoldingPerformance, PortfolioWeights,
    PredictionResult, PriceBar, RecentSignal, TickerSentiment, VarResult,
};
