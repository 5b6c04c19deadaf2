use anyhow::Context;
use api_client::ApiClient;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use configuration::{ProfileStore, load_settings};
use core_types::{
    AnalyzeSentimentRequest, BacktestReport, ComputeFactorsRequest, DashboardOverview, DateRange,
    DecayCurve, HoldingPerformance, OptimizationMethod, OptimizePortfolioRequest,
    PortfolioWeights, PriceBar, RecentSignal, RunBacktestRequest, SignalDecayRequest,
    TickerSentiment, TrainModelRequest, VarRequest, VarResult, WalkForwardParams,
};
use operation::Operation;
use serde_json::Value;

mod format;
mod views;

/// Where the profile store keeps its snapshots, relative to the working
/// directory.
const PROFILE_DIR: &str = ".quantdesk/profiles";

/// The main entry point for the quantdesk research terminal.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variable overrides from .env, when present.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command-line arguments.
    let cli = Cli::parse();

    // Resolve the backend connection and build the unified client.
    let settings = load_settings().context("Failed to load configuration")?;
    let api = ApiClient::new(&settings.api).context("Failed to build the API client")?;

    // Execute the appropriate command.
    match cli.command {
        Commands::Dashboard => handle_dashboard(&api).await,
        Commands::Ticker(args) => handle_ticker(&api, args).await,
        Commands::Factors(args) => handle_factors(&api, args).await,
        Commands::Train(args) => handle_train(&api, args).await,
        Commands::Backtest(args) => handle_backtest(&api, args).await,
        Commands::Optimize(args) => handle_optimize(&api, args).await,
        Commands::Var(args) => handle_var(&api, args).await,
        Commands::Decay(args) => handle_decay(&api, args).await,
        Commands::Sentiment(args) => handle_sentiment(&api, args).await,
        Commands::Profile(args) => handle_profile(&ProfileStore::new(PROFILE_DIR), args.action),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A terminal front-end for the quantitative research backend.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Portfolio overview, recent signals and top holdings.
    Dashboard,
    /// Price history for a single ticker.
    Ticker(TickerArgs),
    /// Compute a factor matrix for a basket.
    Factors(FactorsArgs),
    /// Start a model training run.
    Train(TrainArgs),
    /// Run a strategy backtest.
    Backtest(BacktestArgs),
    /// Optimize portfolio weights.
    Optimize(OptimizeArgs),
    /// Value-at-risk for a portfolio.
    Var(VarArgs),
    /// Information-coefficient decay for a signal.
    Decay(DecayArgs),
    /// News sentiment for a basket.
    Sentiment(SentimentArgs),
    /// Manage saved parameter profiles.
    Profile(ProfileArgs),
}

#[derive(Parser)]
struct TickerArgs {
    /// The symbol to inspect (e.g., "TSLA").
    symbol: String,

    /// Start of the history window (format: YYYY-MM-DD).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// End of the history window (format: YYYY-MM-DD).
    #[arg(long)]
    to: Option<NaiveDate>,
}

#[derive(Parser)]
struct FactorsArgs {
    /// Comma-separated tickers.
    #[arg(long, value_delimiter = ',')]
    tickers: Vec<String>,

    /// Comma-separated factor names (e.g., "momentum_20d,value_ep").
    #[arg(long, value_delimiter = ',')]
    factors: Vec<String>,

    #[arg(long)]
    from: Option<NaiveDate>,

    #[arg(long)]
    to: Option<NaiveDate>,
}

#[derive(Parser)]
struct TrainArgs {
    /// A display name for the model.
    #[arg(long)]
    name: String,

    /// The prediction target (e.g., "fwd_return_5d").
    #[arg(long)]
    target: String,

    #[arg(long, value_delimiter = ',')]
    tickers: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    factors: Vec<String>,

    /// Extra estimator parameters as a JSON object.
    #[arg(long)]
    params: Option<String>,

    /// In-sample window length in trading days.
    #[arg(long)]
    train_days: Option<u32>,

    /// Out-of-sample window length in trading days.
    #[arg(long)]
    test_days: Option<u32>,

    /// Retrain cadence in trading days.
    #[arg(long)]
    retrain_every: Option<u32>,
}

#[derive(Parser)]
struct BacktestArgs {
    /// The strategy to simulate (backend-registered name).
    #[arg(long)]
    strategy: String,

    #[arg(long, value_delimiter = ',')]
    tickers: Vec<String>,

    #[arg(long)]
    from: NaiveDate,

    #[arg(long)]
    to: NaiveDate,

    /// Initial capital; the backend default applies when omitted.
    #[arg(long)]
    capital: Option<f64>,
}

#[derive(Parser)]
struct OptimizeArgs {
    #[arg(long, value_delimiter = ',')]
    tickers: Vec<String>,

    /// Allocation method: mean-variance, risk-parity, black-litterman or hrp.
    #[arg(long)]
    method: OptimizationMethod,

    #[arg(long)]
    target_return: Option<f64>,

    #[arg(long)]
    target_risk: Option<f64>,
}

#[derive(Parser)]
struct VarArgs {
    /// The portfolio to assess.
    #[arg(long)]
    portfolio: String,

    /// Confidence level as a fraction.
    #[arg(long, default_value_t = 0.95)]
    confidence: f64,

    /// Horizon in days.
    #[arg(long, default_value_t = 1)]
    horizon: u32,
}

#[derive(Parser)]
struct DecayArgs {
    /// The signal to profile (e.g., "momentum").
    #[arg(long)]
    signal: String,

    /// Comma-separated holding horizons in days.
    #[arg(long, value_delimiter = ',', default_value = "1,5,10,21")]
    horizons: Vec<u32>,
}

#[derive(Parser)]
struct SentimentArgs {
    #[arg(long, value_delimiter = ',')]
    tickers: Vec<String>,

    #[arg(long)]
    from: Option<NaiveDate>,

    #[arg(long)]
    to: Option<NaiveDate>,
}

#[derive(Parser)]
struct ProfileArgs {
    #[command(subcommand)]
    action: ProfileAction,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Save a JSON snapshot under a name.
    Save { name: String, json: String },
    /// Print a saved snapshot.
    Load { name: String },
    /// List saved profiles.
    List,
    /// Delete one profile.
    Delete { name: String },
    /// Delete every profile.
    Clear,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

/// Fetches the three dashboard panels concurrently and renders each one.
async fn handle_dashboard(api: &ApiClient) -> anyhow::Result<()> {
    let overview: Operation<DashboardOverview> = Operation::new();
    let signals: Operation<Vec<RecentSignal>> = Operation::new();
    let holdings: Operation<Vec<HoldingPerformance>> = Operation::new();

    futures::join!(
        overview.run(api.dashboard.overview()),
        signals.run(api.dashboard.recent_signals(Some(5))),
        holdings.run(api.dashboard.top_holdings()),
    );

    views::render_overview(&overview.snapshot());
    views::render_signals(&signals.snapshot());
    views::render_holdings(&holdings.snapshot());
    Ok(())
}

async fn handle_ticker(api: &ApiClient, args: TickerArgs) -> anyhow::Result<()> {
    let history: Operation<Vec<PriceBar>> = Operation::new();
    let range = DateRange::new(args.from, args.to);
    history.run(api.ticker.history(&args.symbol, &range)).await;
    views::render_price_history(&args.symbol, &history.snapshot());
    Ok(())
}

async fn handle_factors(api: &ApiClient, args: FactorsArgs) -> anyhow::Result<()> {
    let compute: Operation<Value> = Operation::new();
    let request = ComputeFactorsRequest {
        tickers: args.tickers,
        factors: args.factors,
        start_date: args.from,
        end_date: args.to,
    };
    compute.run(api.factor.compute(&request)).await;
    views::render_json("factor matrix", &compute.snapshot());
    Ok(())
}

/// Kicks off a training run. This is fire-and-forget from the terminal's
/// point of view: failures surface through the error hook as well as the
/// rendered snapshot.
async fn handle_train(api: &ApiClient, args: TrainArgs) -> anyhow::Result<()> {
    let params = match &args.params {
        Some(raw) => serde_json::from_str(raw).context("--params is not valid JSON")?,
        None => serde_json::json!({}),
    };

    let walk_forward_params = match (args.train_days, args.test_days, args.retrain_every) {
        (Some(train_days), Some(test_days), Some(retrain_frequency)) => Some(WalkForwardParams {
            train_days,
            test_days,
            retrain_frequency,
        }),
        (None, None, None) => None,
        _ => anyhow::bail!(
            "walk-forward training needs --train-days, --test-days and --retrain-every together"
        ),
    };

    let request = TrainModelRequest {
        name: args.name,
        factors: args.factors,
        tickers: args.tickers,
        target: args.target,
        params,
        walk_forward_params,
    };

    let train: Operation<Value> =
        Operation::new().on_error(|err| tracing::error!(error = %err, "Training request failed."));
    train.run(api.model.train(&request)).await;
    views::render_json("training", &train.snapshot());
    Ok(())
}

async fn handle_backtest(api: &ApiClient, args: BacktestArgs) -> anyhow::Result<()> {
    let backtest: Operation<BacktestReport> = Operation::new();
    let request = RunBacktestRequest {
        strategy: args.strategy,
        tickers: args.tickers,
        start_date: args.from,
        end_date: args.to,
        initial_capital: args.capital,
        config: None,
    };
    backtest.run(api.backtest.run(&request)).await;
    views::render_backtest(&backtest.snapshot());
    Ok(())
}

async fn handle_optimize(api: &ApiClient, args: OptimizeArgs) -> anyhow::Result<()> {
    let optimize: Operation<PortfolioWeights> = Operation::new();
    let request = OptimizePortfolioRequest {
        tickers: args.tickers,
        method: args.method,
        constraints: None,
        target_return: args.target_return,
        target_risk: args.target_risk,
    };
    optimize.run(api.portfolio.optimize(&request)).await;
    views::render_weights(&optimize.snapshot());
    Ok(())
}

async fn handle_var(api: &ApiClient, args: VarArgs) -> anyhow::Result<()> {
    let var: Operation<VarResult> = Operation::new();
    let request = VarRequest {
        portfolio_id: args.portfolio,
        confidence: args.confidence,
        horizon: args.horizon,
    };
    var.run(api.risk.var(&request)).await;
    views::render_var(&var.snapshot());
    Ok(())
}

async fn handle_decay(api: &ApiClient, args: DecayArgs) -> anyhow::Result<()> {
    let decay: Operation<DecayCurve> = Operation::new();
    let request = SignalDecayRequest {
        signal_type: args.signal,
        horizons: args.horizons,
    };
    decay.run(api.signal.decay(&request)).await;
    views::render_decay(&decay.snapshot());
    Ok(())
}

async fn handle_sentiment(api: &ApiClient, args: SentimentArgs) -> anyhow::Result<()> {
    let sentiment: Operation<Vec<TickerSentiment>> = Operation::new();
    let request = AnalyzeSentimentRequest {
        tickers: args.tickers,
        start_date: args.from,
        end_date: args.to,
    };
    sentiment.run(api.sentiment.analyze(&request)).await;
    views::render_sentiment(&sentiment.snapshot());
    Ok(())
}

fn handle_profile(store: &ProfileStore, action: ProfileAction) -> anyhow::Result<()> {
    match action {
        ProfileAction::Save { name, json } => {
            let snapshot: Value =
                serde_json::from_str(&json).context("profile snapshot is not valid JSON")?;
            store.save(&name, &snapshot)?;
            println!("Saved profile '{name}'");
        }
        ProfileAction::Load { name } => {
            let snapshot = store.load(&name)?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        ProfileAction::List => {
            for name in store.list()? {
                println!("{name}");
            }
        }
        ProfileAction::Delete { name } => {
            store.delete(&name)?;
            println!("Deleted profile '{name}'");
        }
        ProfileAction::Clear => {
            store.clear()?;
            println!("Profile store cleared");
        }
    }
    Ok(())
}
