use chrono::NaiveDate;
use std::collections::HashMap;

use crate::models::analytics::{
    PerformanceHighlights, PerformerSnapshot, PortfolioSummary, SectorBucket, SectorPosition,
};
use crate::models::holding::{EnrichedHolding, UNKNOWN_SECTOR};

/// Days per year used by the annualized-return approximation.
const DAYS_PER_YEAR: f64 = 365.0;

/// Folds enriched holdings into portfolio-level metrics: totals,
/// the simplified IRR, sector allocation, and display highlights.
///
/// Pure business logic — no I/O, no state. Easy to test.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate the enriched holdings into a portfolio summary.
    /// An empty list yields the all-zero summary.
    pub fn summarize(&self, enriched: &[EnrichedHolding], as_of: NaiveDate) -> PortfolioSummary {
        if enriched.is_empty() {
            return PortfolioSummary::empty(as_of);
        }

        let total_current_value: f64 = enriched.iter().map(|e| e.current_value).sum();
        let total_initial_value: f64 = enriched.iter().map(|e| e.holding.initial_value()).sum();
        let total_profit_loss = total_current_value - total_initial_value;
        let total_profit_loss_percentage = if total_initial_value > 0.0 {
            (total_profit_loss / total_initial_value) * 100.0
        } else {
            0.0
        };

        let total_annual_dividend: f64 = enriched.iter().map(|e| e.annual_dividend_income).sum();
        let portfolio_dividend_yield = if total_current_value > 0.0 {
            (total_annual_dividend / total_current_value) * 100.0
        } else {
            0.0
        };

        // Lump-sum basis: the first holding in entry order, not the
        // earliest purchase across the portfolio.
        let basis_date = enriched[0].holding.purchase_date;
        let irr = Self::annualized_return(
            total_initial_value,
            total_current_value,
            basis_date,
            as_of,
        );

        PortfolioSummary {
            as_of_date: as_of,
            total_current_value,
            total_initial_value,
            total_profit_loss,
            total_profit_loss_percentage,
            total_annual_dividend,
            portfolio_dividend_yield,
            irr,
        }
    }

    /// Group holdings by resolved sector into allocation buckets,
    /// sorted by total value (largest first).
    pub fn group_by_sector(&self, enriched: &[EnrichedHolding]) -> Vec<SectorBucket> {
        let mut groups: HashMap<String, SectorBucket> = HashMap::new();

        for e in enriched {
            let sector = if e.resolved_sector.trim().is_empty() {
                UNKNOWN_SECTOR.to_string()
            } else {
                e.resolved_sector.clone()
            };

            let bucket = groups.entry(sector.clone()).or_insert_with(|| SectorBucket {
                sector,
                total_value: 0.0,
                allocation_pct: 0.0,
                positions: Vec::new(),
            });
            bucket.total_value += e.current_value;
            bucket.positions.push(SectorPosition {
                symbol: e.holding.symbol.clone(),
                value: e.current_value,
            });
        }

        let mut buckets: Vec<SectorBucket> = groups.into_values().collect();

        let grand_total: f64 = buckets.iter().map(|b| b.total_value).sum();
        for bucket in &mut buckets {
            bucket.allocation_pct = if grand_total > 0.0 {
                (bucket.total_value / grand_total) * 100.0
            } else {
                0.0
            };
        }

        buckets.sort_by(|a, b| {
            b.total_value
                .partial_cmp(&a.total_value)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.sector.cmp(&b.sector))
        });

        buckets
    }

    /// Best/worst performer by return percentage, the top dividend
    /// payer, and the portfolio's age. `None` for an empty list.
    pub fn performance_highlights(
        &self,
        enriched: &[EnrichedHolding],
        as_of: NaiveDate,
    ) -> Option<PerformanceHighlights> {
        let best = enriched.iter().max_by(|a, b| {
            a.profit_loss_percentage
                .partial_cmp(&b.profit_loss_percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        let worst = enriched.iter().min_by(|a, b| {
            a.profit_loss_percentage
                .partial_cmp(&b.profit_loss_percentage)
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;

        let highest_dividend = enriched
            .iter()
            .max_by(|a, b| {
                a.dividend_yield
                    .partial_cmp(&b.dividend_yield)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .filter(|e| e.dividend_yield > 0.0)
            .map(Self::snapshot);

        let earliest = enriched
            .iter()
            .map(|e| e.holding.purchase_date)
            .min()?;

        Some(PerformanceHighlights {
            best_performer: Self::snapshot(best),
            worst_performer: Self::snapshot(worst),
            highest_dividend,
            portfolio_age_days: (as_of - earliest).num_days().max(0),
        })
    }

    /// Annualized lump-sum return between two dates, as a percent.
    /// Elapsed time is floored at one day so a same-day portfolio does
    /// not divide by zero.
    fn annualized_return(
        initial_value: f64,
        current_value: f64,
        basis_date: NaiveDate,
        as_of: NaiveDate,
    ) -> f64 {
        if initial_value <= 0.0 {
            return 0.0;
        }
        let days = (as_of - basis_date).num_days().max(1) as f64;
        let years = days / DAYS_PER_YEAR;
        ((current_value / initial_value).powf(1.0 / years) - 1.0) * 100.0
    }

    fn snapshot(e: &EnrichedHolding) -> PerformerSnapshot {
        PerformerSnapshot {
            symbol: e.holding.symbol.clone(),
            profit_loss_percentage: e.profit_loss_percentage,
            initial_value: e.holding.initial_value(),
            current_value: e.current_value,
            dividend_yield: e.dividend_yield,
            annual_dividend_income: e.annual_dividend_income,
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
