use serde::{Deserialize, Serialize};

use super::holding::UNKNOWN_SECTOR;

/// Latest price snapshot for one symbol, as returned by the market-data
/// service. A price of 0.0 is the "no data" sentinel — the enrichment
/// engine treats it as missing, not as an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub price: f64,
}

impl Quote {
    pub fn new(price: f64) -> Self {
        Self { price }
    }

    /// The soft-failure sentinel: no price data available.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { price: 0.0 }
    }
}

/// Company reference data for one symbol: sector classification and the
/// latest single dividend payment per share.
///
/// Providers normalize their payloads into this shape; missing data maps
/// to the [`Default`] value rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// Sector classification; "Unknown" when the provider has none
    pub sector: String,

    /// Cash amount of the most recent dividend payment, per share
    pub dividend_per_payment: f64,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            sector: UNKNOWN_SECTOR.to_string(),
            dividend_per_payment: 0.0,
        }
    }
}

/// A raw ticker-search candidate before decoration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolMatch {
    pub symbol: String,
    pub name: String,
}

/// A search candidate decorated with current price and dividend data,
/// ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockSearchResult {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub current_price: f64,
    pub dividend_yield: f64,
    pub dividend_per_share: f64,
}
