use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::traits::MarketDataProvider;
use crate::errors::CoreError;
use crate::models::holding::UNKNOWN_SECTOR;
use crate::models::market::{CompanyInfo, SymbolMatch};

const BASE_URL: &str = "https://api.polygon.io";

/// Maximum number of ticker-search candidates requested per query.
const SEARCH_LIMIT: usize = 10;

/// Polygon.io API provider for US equity market data.
///
/// - **Requires**: API key (set via settings as "polygon").
/// - **Price**: previous-day aggregate bar (`/v2/aggs/.../prev`), close.
/// - **Sector**: ticker details `sic_description`.
/// - **Dividend**: latest dividend record's `cash_amount`.
/// - **Search**: reference tickers endpoint, active symbols only.
///
/// Prices are in USD; this tracker is single-currency by design.
pub struct PolygonProvider {
    client: Client,
    api_key: String,
}

impl PolygonProvider {
    pub fn new(api_key: String) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key,
        }
    }
}

// ── Polygon API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct PrevCloseResponse {
    results: Option<Vec<PrevCloseBar>>,
}

#[derive(Deserialize)]
struct PrevCloseBar {
    /// Closing price
    c: f64,
}

#[derive(Deserialize)]
struct TickerDetailsResponse {
    results: Option<TickerDetails>,
}

#[derive(Deserialize)]
struct TickerDetails {
    sic_description: Option<String>,
}

#[derive(Deserialize)]
struct DividendsResponse {
    results: Option<Vec<DividendRecord>>,
}

#[derive(Deserialize)]
struct DividendRecord {
    cash_amount: Option<f64>,
}

#[derive(Deserialize)]
struct TickerSearchResponse {
    results: Option<Vec<TickerSearchMatch>>,
}

#[derive(Deserialize)]
struct TickerSearchMatch {
    ticker: String,
    name: Option<String>,
}

#[async_trait]
impl MarketDataProvider for PolygonProvider {
    fn name(&self) -> &str {
        "Polygon.io"
    }

    async fn get_quote(&self, symbol: &str) -> Result<f64, CoreError> {
        let symbol = symbol.to_uppercase();
        let url = format!("{BASE_URL}/v2/aggs/ticker/{symbol}/prev");

        let resp: PrevCloseResponse = self
            .client
            .get(&url)
            .query(&[("adjusted", "true"), ("apiKey", &self.api_key)])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Polygon.io".into(),
                message: format!("Failed to parse previous close for {symbol}: {e}"),
            })?;

        resp.results
            .and_then(|bars| bars.first().map(|b| b.c))
            .ok_or(CoreError::DataUnavailable { symbol })
    }

    async fn get_company_info(&self, symbol: &str) -> Result<CompanyInfo, CoreError> {
        let symbol = symbol.to_uppercase();

        let details_url = format!("{BASE_URL}/v3/reference/tickers/{symbol}");
        let details: TickerDetailsResponse = self
            .client
            .get(&details_url)
            .query(&[("apiKey", &self.api_key)])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Polygon.io".into(),
                message: format!("Failed to parse ticker details for {symbol}: {e}"),
            })?;

        let dividends_url = format!("{BASE_URL}/v3/reference/dividends");
        let dividends: DividendsResponse = self
            .client
            .get(&dividends_url)
            .query(&[
                ("ticker", symbol.as_str()),
                ("limit", "1"),
                ("apiKey", &self.api_key),
            ])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Polygon.io".into(),
                message: format!("Failed to parse dividends for {symbol}: {e}"),
            })?;

        let sector = details
            .results
            .and_then(|d| d.sic_description)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_SECTOR.to_string());

        let dividend_per_payment = dividends
            .results
            .and_then(|r| r.first().and_then(|d| d.cash_amount))
            .unwrap_or(0.0);

        Ok(CompanyInfo {
            sector,
            dividend_per_payment,
        })
    }

    async fn search(&self, query: &str) -> Result<Vec<SymbolMatch>, CoreError> {
        let url = format!("{BASE_URL}/v3/reference/tickers");
        let limit = SEARCH_LIMIT.to_string();

        let resp: TickerSearchResponse = self
            .client
            .get(&url)
            .query(&[
                ("search", query),
                ("active", "true"),
                ("limit", &limit),
                ("apiKey", &self.api_key),
            ])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Polygon.io".into(),
                message: format!("Failed to parse ticker search for '{query}': {e}"),
            })?;

        let matches = resp
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|m| SymbolMatch {
                name: m.name.unwrap_or_else(|| m.ticker.clone()),
                symbol: m.ticker,
            })
            .collect();

        Ok(matches)
    }
}
