use serde::{Deserialize, Serialize};

use super::analytics::{PerformanceHighlights, PortfolioSummary, SectorBucket};
use super::holding::{EnrichedHolding, Holding};

/// One owner's full set of holdings. This is what the store persists.
///
/// Holdings keep insertion order (entry order, not purchase-date order).
/// Owner identity is the unique store key; a portfolio is created lazily
/// on first access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Unique owner identity (e.g., an email address)
    pub owner: String,

    /// All purchase lots, in entry order
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            holdings: Vec::new(),
        }
    }
}

/// The full portfolio-view payload: raw portfolio header, enriched
/// holdings in entry order, and all derived aggregates.
///
/// Transient — rebuilt from fresh market data on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioView {
    /// Owner identity this view was computed for
    pub owner: String,

    /// Enriched holdings, same order and count as the stored portfolio
    pub holdings: Vec<EnrichedHolding>,

    /// Portfolio-level totals and the annualized-return approximation
    pub summary: PortfolioSummary,

    /// Current value grouped by sector, largest bucket first
    pub allocation: Vec<SectorBucket>,

    /// Best/worst performer and dividend standouts; None when empty
    pub highlights: Option<PerformanceHighlights>,
}
