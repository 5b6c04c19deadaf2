//! Terminal rendering of operation snapshots.
//!
//! Every view reads an [`OperationState`] and renders only when the data is
//! actually present: never while loading, never past an error. Errors render
//! inline as display text; they are already user-presentable.

use crate::format;
use comfy_table::Table;
use core_types::{
    BacktestReport, DashboardOverview, DecayCurve, HoldingPerformance, PortfolioWeights, PriceBar,
    RecentSignal, TickerSentiment, VarResult,
};
use operation::OperationState;
use serde_json::Value;

/// Extracts the payload if the operation settled successfully, printing the
/// inline failure line otherwise.
fn guard<'a, T>(state: &'a OperationState<T>, what: &str) -> Option<&'a T> {
    if let Some(error) = &state.error {
        println!("Failed to load {what}: {error}");
        return None;
    }
    if state.loading {
        println!("{what}: still loading");
        return None;
    }
    state.data.as_ref()
}

pub fn render_overview(state: &OperationState<DashboardOverview>) {
    let Some(overview) = guard(state, "dashboard overview") else {
        return;
    };

    let mut table = Table::new();
    table.set_header(vec![
        "Portfolio Value",
        "Total Return",
        "Sharpe",
        "Max Drawdown",
        "Active Models",
    ]);
    table.add_row(vec![
        format::currency(overview.portfolio_value),
        format::signed_percent(overview.total_return, 1),
        overview.sharpe_ratio.map(format::ratio).unwrap_or_else(|| "-".into()),
        overview
            .max_drawdown
            .map(|v| format::signed_percent(v, 1))
            .unwrap_or_else(|| "-".into()),
        overview
            .active_models
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".into()),
    ]);
    println!("{table}");
}

pub fn render_signals(state: &OperationState<Vec<RecentSignal>>) {
    let Some(signals) = guard(state, "recent signals") else {
        return;
    };
    if signals.is_empty() {
        println!("No signals available");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Ticker", "Side", "Confidence"]);
    for signal in signals {
        table.add_row(vec![
            signal.ticker.clone(),
            signal.side.to_string(),
            format::percent(signal.confidence * 100.0, 0),
        ]);
    }
    println!("{table}");
}

pub fn render_holdings(state: &OperationState<Vec<HoldingPerformance>>) {
    let Some(holdings) = guard(state, "top holdings") else {
        return;
    };

    let mut table = Table::new();
    table.set_header(vec!["Name", "Returns", "Sharpe", "Max Drawdown"]);
    for row in holdings {
        table.add_row(vec![
            row.name.clone(),
            format::signed_percent(row.returns * 100.0, 2),
            format::ratio(row.sharpe),
            format::signed_percent(row.max_drawdown * 100.0, 2),
        ]);
    }
    println!("{table}");
}

pub fn render_price_history(symbol: &str, state: &OperationState<Vec<PriceBar>>) {
    let Some(bars) = guard(state, "price history") else {
        return;
    };

    println!("{symbol}: {} bars", bars.len());
    let mut table = Table::new();
    table.set_header(vec!["Date", "Open", "High", "Low", "Close", "Volume"]);
    // Tail only; full history belongs in a chart, not a terminal.
    for bar in bars.iter().rev().take(10).rev() {
        table.add_row(vec![
            bar.date.clone(),
            format::ratio(bar.open),
            format::ratio(bar.high),
            format::ratio(bar.low),
            format::ratio(bar.close),
            format::compact(bar.volume),
        ]);
    }
    println!("{table}");
}

pub fn render_backtest(state: &OperationState<BacktestReport>) {
    let Some(report) = guard(state, "backtest") else {
        return;
    };

    let mut table = Table::new();
    table.set_header(vec!["CAGR", "Sharpe", "Max Drawdown"]);
    table.add_row(vec![
        format::signed_percent(report.metrics.cagr * 100.0, 2),
        format::ratio(report.metrics.sharpe),
        format::signed_percent(report.metrics.max_dd * 100.0, 2),
    ]);
    println!("{table}");

    let series = &report.series;
    if let (Some(date), Some(equity), Some(benchmark)) = (
        series.dates.last(),
        series.equity.last(),
        series.buy_hold.last(),
    ) {
        println!(
            "Final equity on {date}: {} (buy & hold {})",
            format::currency(*equity),
            format::currency(*benchmark)
        );
    }
}

pub fn render_weights(state: &OperationState<PortfolioWeights>) {
    let Some(allocation) = guard(state, "portfolio weights") else {
        return;
    };

    let mut table = Table::new();
    table.set_header(vec!["Ticker", "Weight"]);
    for (ticker, weight) in &allocation.weights {
        table.add_row(vec![ticker.clone(), format::percent(weight * 100.0, 2)]);
    }
    println!("{table}");

    if let Some(expected_return) = allocation.expected_return {
        println!("Expected return: {}", format::percent(expected_return * 100.0, 2));
    }
    if let Some(expected_risk) = allocation.expected_risk {
        println!("Expected risk: {}", format::percent(expected_risk * 100.0, 2));
    }
}

pub fn render_var(state: &OperationState<VarResult>) {
    let Some(result) = guard(state, "value at risk") else {
        return;
    };

    let mut table = Table::new();
    table.set_header(vec!["VaR", "Confidence", "Horizon (days)", "Expected Shortfall"]);
    table.add_row(vec![
        format::currency(result.var),
        format::percent(result.confidence * 100.0, 0),
        result.horizon.to_string(),
        result
            .expected_shortfall
            .map(format::currency)
            .unwrap_or_else(|| "-".into()),
    ]);
    println!("{table}");
}

pub fn render_sentiment(state: &OperationState<Vec<TickerSentiment>>) {
    let Some(rows) = guard(state, "sentiment") else {
        return;
    };

    let mut table = Table::new();
    table.set_header(vec!["Ticker", "Score", "Headlines"]);
    for row in rows {
        table.add_row(vec![
            row.ticker.clone(),
            format!("{:+.2}", row.score),
            row.headline_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".into()),
        ]);
    }
    println!("{table}");
}

pub fn render_decay(state: &OperationState<DecayCurve>) {
    let Some(curve) = guard(state, "signal decay") else {
        return;
    };

    let mut table = Table::new();
    table.set_header(vec!["Horizon (days)", "IC"]);
    for (horizon, ic) in curve.horizons.iter().zip(&curve.ic) {
        table.add_row(vec![horizon.to_string(), format!("{ic:.4}")]);
    }
    println!("{table}");
}

/// Fallback for the open-ended analytics payloads.
pub fn render_json(label: &str, state: &OperationState<Value>) {
    let Some(value) = guard(state, label) else {
        return;
    };
    match serde_json::to_string_pretty(value) {
        Ok(pretty) => println!("{pretty}"),
        Err(_) => println!("{value}"),
    }
}
