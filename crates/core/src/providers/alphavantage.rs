use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::traits::MarketDataProvider;
use crate::errors::CoreError;
use crate::models::holding::UNKNOWN_SECTOR;
use crate::models::market::{CompanyInfo, SymbolMatch};
use crate::services::enrichment_service::DIVIDEND_PAYMENTS_PER_YEAR;

const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Alpha Vantage API provider for stock/equity data (fallback).
///
/// - **Free tier**: 25 requests/day (across ALL endpoints).
/// - **Requires**: API key (set via settings as "alphavantage").
/// - **Price**: GLOBAL_QUOTE endpoint.
/// - **Sector/Dividend**: OVERVIEW endpoint. Alpha Vantage reports an
///   ANNUAL dividend per share, so the adapter divides it back down to
///   a per-payment amount to satisfy the provider contract.
/// - **Search**: SYMBOL_SEARCH endpoint.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
}

impl AlphaVantageProvider {
    pub fn new(api_key: String) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key,
        }
    }
}

// ── Alpha Vantage API response types ────────────────────────────────

#[derive(Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
}

#[derive(Deserialize)]
struct GlobalQuote {
    #[serde(rename = "05. price")]
    price: Option<String>,
}

#[derive(Deserialize)]
struct OverviewResponse {
    #[serde(rename = "Sector")]
    sector: Option<String>,
    #[serde(rename = "DividendPerShare")]
    dividend_per_share: Option<String>,
}

#[derive(Deserialize)]
struct SymbolSearchResponse {
    #[serde(rename = "bestMatches")]
    best_matches: Option<Vec<SymbolSearchMatch>>,
}

#[derive(Deserialize)]
struct SymbolSearchMatch {
    #[serde(rename = "1. symbol")]
    symbol: Option<String>,
    #[serde(rename = "2. name")]
    name: Option<String>,
}

#[async_trait]
impl MarketDataProvider for AlphaVantageProvider {
    fn name(&self) -> &str {
        "Alpha Vantage"
    }

    async fn get_quote(&self, symbol: &str) -> Result<f64, CoreError> {
        let resp: GlobalQuoteResponse = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", &symbol.to_uppercase()),
                ("apikey", &self.api_key),
            ])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Alpha Vantage".into(),
                message: format!("Failed to parse quote for {symbol}: {e}"),
            })?;

        let price_str = resp
            .global_quote
            .and_then(|q| q.price)
            .ok_or_else(|| CoreError::Api {
                provider: "Alpha Vantage".into(),
                message: format!("No quote data for {symbol}. API limit may be exceeded."),
            })?;

        price_str.parse().map_err(|e| CoreError::Api {
            provider: "Alpha Vantage".into(),
            message: format!("Invalid price format for {symbol}: {e}"),
        })
    }

    async fn get_company_info(&self, symbol: &str) -> Result<CompanyInfo, CoreError> {
        let resp: OverviewResponse = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", "OVERVIEW"),
                ("symbol", &symbol.to_uppercase()),
                ("apikey", &self.api_key),
            ])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Alpha Vantage".into(),
                message: format!("Failed to parse overview for {symbol}: {e}"),
            })?;

        let sector = resp
            .sector
            .filter(|s| !s.trim().is_empty() && s != "None")
            .unwrap_or_else(|| UNKNOWN_SECTOR.to_string());

        // OVERVIEW reports the annual figure; the contract wants the
        // amount of a single payment.
        let annual: f64 = resp
            .dividend_per_share
            .and_then(|d| d.parse().ok())
            .unwrap_or(0.0);
        let dividend_per_payment = annual / DIVIDEND_PAYMENTS_PER_YEAR;

        Ok(CompanyInfo {
            sector,
            dividend_per_payment,
        })
    }

    async fn search(&self, query: &str) -> Result<Vec<SymbolMatch>, CoreError> {
        let resp: SymbolSearchResponse = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", "SYMBOL_SEARCH"),
                ("keywords", query),
                ("apikey", &self.api_key),
            ])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Alpha Vantage".into(),
                message: format!("Failed to parse symbol search for '{query}': {e}"),
            })?;

        let matches = resp
            .best_matches
            .unwrap_or_default()
            .into_iter()
            .filter_map(|m| {
                let symbol = m.symbol?;
                let name = m.name.unwrap_or_else(|| symbol.clone());
                Some(SymbolMatch { symbol, name })
            })
            .collect();

        Ok(matches)
    }
}
