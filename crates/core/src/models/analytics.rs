use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Portfolio-level totals computed from the enriched holdings list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Date this summary was computed for
    pub as_of_date: NaiveDate,

    /// Sum of each holding's current value
    pub total_current_value: f64,

    /// Sum of each holding's shares × purchase price
    pub total_initial_value: f64,

    /// total_current_value − total_initial_value
    pub total_profit_loss: f64,

    /// Percentage gain/loss over the initial value; 0 when nothing invested
    pub total_profit_loss_percentage: f64,

    /// Sum of each holding's annual dividend income
    pub total_annual_dividend: f64,

    /// total_annual_dividend / total_current_value × 100
    pub portfolio_dividend_yield: f64,

    /// Annualized-return approximation (percent). Treats the whole
    /// portfolio as a single lump sum invested on the first holding's
    /// purchase date — not a cash-flow-weighted IRR.
    pub irr: f64,
}

impl PortfolioSummary {
    /// The all-zero summary for an empty portfolio.
    #[must_use]
    pub fn empty(as_of_date: NaiveDate) -> Self {
        Self {
            as_of_date,
            total_current_value: 0.0,
            total_initial_value: 0.0,
            total_profit_loss: 0.0,
            total_profit_loss_percentage: 0.0,
            total_annual_dividend: 0.0,
            portfolio_dividend_yield: 0.0,
            irr: 0.0,
        }
    }
}

/// Current value of all holdings sharing one sector classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorBucket {
    /// Sector name; "Unknown" collects unclassified holdings
    pub sector: String,

    /// Sum of member current values
    pub total_value: f64,

    /// This bucket's share of the summed bucket values × 100
    pub allocation_pct: f64,

    /// Member holdings with their current values, in entry order
    pub positions: Vec<SectorPosition>,
}

/// One holding's contribution to a sector bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorPosition {
    pub symbol: String,
    pub value: f64,
}

/// A single holding's numbers as shown in the highlights panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformerSnapshot {
    pub symbol: String,
    pub profit_loss_percentage: f64,
    pub initial_value: f64,
    pub current_value: f64,
    pub dividend_yield: f64,
    pub annual_dividend_income: f64,
}

/// Display-side performance metrics: best/worst holdings by return,
/// the top dividend payer, and the portfolio's age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceHighlights {
    /// Highest profit/loss percentage
    pub best_performer: PerformerSnapshot,

    /// Lowest profit/loss percentage
    pub worst_performer: PerformerSnapshot,

    /// Highest dividend yield; None when no holding pays a dividend
    pub highest_dividend: Option<PerformerSnapshot>,

    /// Days since the earliest purchase date across all holdings
    pub portfolio_age_days: i64,
}
