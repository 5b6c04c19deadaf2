use crate::clients::{
    BacktestClient, DashboardClient, DataClient, ExperimentClient, FactorClient, ModelClient,
    PortfolioClient, RiskClient, SentimentClient, SettingsClient, SignalClient, TickerClient,
};
use crate::transport::Transport;
use configuration::ApiSettings;
use std::sync::Arc;

pub mod clients;
pub mod error;
pub mod transport;

// --- Public API ---
pub use error::ApiError;
pub use transport::CallClass;

/// The unified client for the research backend.
///
/// One `Transport` shared by twelve per-domain resource clients, so every
/// view reaches the whole surface through a single handle. Cloning is cheap;
/// clones share the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    pub dashboard: DashboardClient,
    pub ticker: TickerClient,
    pub factor: FactorClient,
    pub model: ModelClient,
    pub experiment: ExperimentClient,
    pub signal: SignalClient,
    pub backtest: BacktestClient,
    pub portfolio: PortfolioClient,
    pub risk: RiskClient,
    pub sentiment: SentimentClient,
    pub data: DataClient,
    pub settings: SettingsClient,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let transport = Arc::new(Transport::new(settings)?);
        Ok(Self::with_transport(transport))
    }

    fn with_transport(transport: Arc<Transport>) -> Self {
        Self {
            dashboard: DashboardClient::new(transport.clone()),
            ticker: TickerClient::new(transport.clone()),
            factor: FactorClient::new(transport.clone()),
            model: ModelClient::new(transport.clone()),
            experiment: ExperimentClient::new(transport.clone()),
            signal: SignalClient::new(transport.clone()),
            backtest: BacktestClient::new(transport.clone()),
            portfolio: PortfolioClient::new(transport.clone()),
            risk: RiskClient::new(transport.clone()),
            sentiment: SentimentClient::new(transport.clone()),
            data: DataClient::new(transport.clone()),
            settings: SettingsClient::new(transport),
        }
    }
}
