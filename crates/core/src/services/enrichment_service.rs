use chrono::Utc;
use futures::future::join_all;

use crate::models::holding::{EnrichedHolding, Holding, UNKNOWN_SECTOR};
use crate::models::market::{CompanyInfo, Quote, StockSearchResult, SymbolMatch};
use crate::services::market_data_service::MarketDataService;

/// Assumed dividend cadence: the latest payment is annualized by
/// multiplying with this constant. Wrong for monthly/semiannual/annual
/// payers; kept as a documented simplification.
pub const DIVIDEND_PAYMENTS_PER_YEAR: f64 = 4.0;

/// Computes per-holding derived metrics from fresh market data.
///
/// Pure transforms — no I/O, no state. The market data arrives already
/// soft-failed: a symbol with no data carries a zero quote and default
/// company info, and enrichment proceeds with zeroed derived fields so
/// the holding keeps its position in the list.
pub struct EnrichmentService;

impl EnrichmentService {
    pub fn new() -> Self {
        Self
    }

    /// Enrich a single holding. Pure function of its inputs, except for
    /// the `last_updated` timestamp stamped at call time.
    pub fn enrich(&self, holding: &Holding, quote: &Quote, info: &CompanyInfo) -> EnrichedHolding {
        let current_price = quote.price;
        let annual_dividend_per_share = info.dividend_per_payment * DIVIDEND_PAYMENTS_PER_YEAR;
        let dividend_yield = if current_price > 0.0 {
            (annual_dividend_per_share / current_price) * 100.0
        } else {
            0.0
        };

        let current_value = current_price * holding.shares;
        let initial_value = holding.initial_value();
        let profit_loss = current_value - initial_value;
        let profit_loss_percentage = if initial_value > 0.0 {
            (profit_loss / initial_value) * 100.0
        } else {
            0.0
        };

        EnrichedHolding {
            current_price,
            current_value,
            profit_loss,
            profit_loss_percentage,
            dividend_yield,
            annual_dividend_per_share,
            annual_dividend_income: annual_dividend_per_share * holding.shares,
            resolved_sector: Self::resolve_sector(&info.sector, &holding.sector),
            last_updated: Utc::now(),
            holding: holding.clone(),
        }
    }

    /// Enrich every holding with freshly fetched market data.
    ///
    /// Lookups are independent, so they fan out concurrently; the join
    /// is the barrier before aggregation and preserves holdings order.
    /// Per-symbol failures degrade to zeroed fields, never abort the batch.
    pub async fn enrich_all(
        &self,
        market_data: &MarketDataService,
        holdings: &[Holding],
    ) -> Vec<EnrichedHolding> {
        let lookups = holdings.iter().map(|holding| async move {
            let (quote, info) = tokio::join!(
                market_data.quote_or_default(&holding.symbol),
                market_data.company_info_or_default(&holding.symbol),
            );
            self.enrich(holding, &quote, &info)
        });

        join_all(lookups).await
    }

    /// Attach price and dividend data to a raw search candidate.
    pub fn decorate_match(
        &self,
        candidate: SymbolMatch,
        quote: &Quote,
        info: &CompanyInfo,
    ) -> StockSearchResult {
        let annual = info.dividend_per_payment * DIVIDEND_PAYMENTS_PER_YEAR;
        let dividend_yield = if quote.price > 0.0 {
            (annual / quote.price) * 100.0
        } else {
            0.0
        };

        StockSearchResult {
            symbol: candidate.symbol,
            name: candidate.name,
            sector: info.sector.clone(),
            current_price: quote.price,
            dividend_yield,
            dividend_per_share: info.dividend_per_payment,
        }
    }

    /// Provider sector wins when it carries real information; otherwise
    /// fall back to whatever was recorded when the holding was added.
    fn resolve_sector(provider_sector: &str, stored_sector: &str) -> String {
        let provider = provider_sector.trim();
        if !provider.is_empty() && provider != UNKNOWN_SECTOR {
            return provider.to_string();
        }
        let stored = stored_sector.trim();
        if stored.is_empty() {
            UNKNOWN_SECTOR.to_string()
        } else {
            stored.to_string()
        }
    }
}

impl Default for EnrichmentService {
    fn default() -> Self {
        Self::new()
    }
}
