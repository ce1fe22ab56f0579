use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::market::{CompanyInfo, SymbolMatch};

/// Trait abstraction for all market-data providers.
///
/// Each API provider (Polygon.io, Alpha Vantage) implements this trait
/// and normalizes its payloads into the shared `Quote`/`CompanyInfo`
/// shapes. If an API stops working or changes, we replace only that one
/// adapter — the enrichment and aggregation engines depend solely on
/// this interface.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Get the latest price per share for a ticker symbol.
    /// A missing/unknown symbol is an error here; the market-data
    /// service converts it to the zero-price sentinel.
    async fn get_quote(&self, symbol: &str) -> Result<f64, CoreError>;

    /// Get sector classification and the latest dividend payment for a
    /// ticker symbol.
    async fn get_company_info(&self, symbol: &str) -> Result<CompanyInfo, CoreError>;

    /// Search for ticker symbols matching a free-text query.
    async fn search(&self, query: &str) -> Result<Vec<SymbolMatch>, CoreError>;
}
