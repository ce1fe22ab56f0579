use std::time::Duration;

use crate::errors::CoreError;
use crate::models::market::{CompanyInfo, Quote, SymbolMatch};
use crate::providers::registry::MarketDataRegistry;

/// Per-lookup deadline. One unresponsive provider must not stall the
/// whole portfolio view.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches market data from API providers with automatic fallback.
///
/// Two surfaces:
/// - `get_quote` / `get_company_info` / `search` return `Result` and try
///   providers in registration order until one succeeds.
/// - `quote_or_default` / `company_info_or_default` never fail: a lookup
///   that errors out (or times out) is logged and replaced by the zeroed
///   default, so one bad symbol never aborts a portfolio computation.
///
/// **Note on precision**: All prices are `f64` (~15-17 significant
/// decimal digits), sufficient for display-level portfolio math.
pub struct MarketDataService {
    registry: MarketDataRegistry,
}

impl MarketDataService {
    pub fn new(registry: MarketDataRegistry) -> Self {
        Self { registry }
    }

    /// Check if at least one provider is configured.
    pub fn has_providers(&self) -> bool {
        !self.registry.is_empty()
    }

    /// Names of all configured providers in priority order.
    pub fn provider_names(&self) -> Vec<String> {
        self.registry
            .providers()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Get the latest price for a symbol, trying providers in order.
    /// Validates that returned prices are finite and non-negative.
    pub async fn get_quote(&self, symbol: &str) -> Result<f64, CoreError> {
        let providers = self.registry.providers();
        if providers.is_empty() {
            return Err(CoreError::NoProvider);
        }

        let mut last_error = None;
        for provider in providers {
            let result = tokio::time::timeout(LOOKUP_TIMEOUT, provider.get_quote(symbol)).await;
            match Self::flatten_timeout(result, provider.name()) {
                Ok(price) => {
                    if !price.is_finite() || price < 0.0 {
                        last_error = Some(CoreError::Api {
                            provider: provider.name().to_string(),
                            message: format!(
                                "Invalid price returned for {symbol}: {price} (must be finite and non-negative)"
                            ),
                        });
                        continue;
                    }
                    return Ok(price);
                }
                Err(e) => {
                    last_error = Some(e);
                    // Try next provider
                }
            }
        }

        Err(last_error.unwrap_or(CoreError::NoProvider))
    }

    /// Get sector and dividend data for a symbol, trying providers in order.
    pub async fn get_company_info(&self, symbol: &str) -> Result<CompanyInfo, CoreError> {
        let providers = self.registry.providers();
        if providers.is_empty() {
            return Err(CoreError::NoProvider);
        }

        let mut last_error = None;
        for provider in providers {
            let result =
                tokio::time::timeout(LOOKUP_TIMEOUT, provider.get_company_info(symbol)).await;
            match Self::flatten_timeout(result, provider.name()) {
                Ok(info) => return Ok(info),
                Err(e) => {
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(CoreError::NoProvider))
    }

    /// Search ticker symbols. Unlike the per-symbol lookups there is no
    /// portfolio to degrade gracefully, so failures propagate.
    pub async fn search(&self, query: &str) -> Result<Vec<SymbolMatch>, CoreError> {
        let providers = self.registry.providers();
        if providers.is_empty() {
            return Err(CoreError::NoProvider);
        }

        let mut last_error = None;
        for provider in providers {
            let result = tokio::time::timeout(LOOKUP_TIMEOUT, provider.search(query)).await;
            match Self::flatten_timeout(result, provider.name()) {
                Ok(matches) => return Ok(matches),
                Err(e) => {
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(CoreError::NoProvider))
    }

    /// Latest price with the no-throw contract: failures map to the
    /// zero-price sentinel and are logged, never raised.
    pub async fn quote_or_default(&self, symbol: &str) -> Quote {
        match self.get_quote(symbol).await {
            Ok(price) => Quote::new(price),
            Err(e) => {
                log::warn!("Price lookup failed for {symbol}, using 0: {e}");
                Quote::unavailable()
            }
        }
    }

    /// Company data with the no-throw contract: failures map to
    /// `{sector: "Unknown", dividend_per_payment: 0}` and are logged.
    pub async fn company_info_or_default(&self, symbol: &str) -> CompanyInfo {
        match self.get_company_info(symbol).await {
            Ok(info) => info,
            Err(e) => {
                log::warn!("Company lookup failed for {symbol}, using defaults: {e}");
                CompanyInfo::default()
            }
        }
    }

    fn flatten_timeout<T>(
        result: Result<Result<T, CoreError>, tokio::time::error::Elapsed>,
        provider: &str,
    ) -> Result<T, CoreError> {
        match result {
            Ok(inner) => inner,
            Err(_) => Err(CoreError::Network(format!(
                "{provider} did not respond within {}s",
                LOOKUP_TIMEOUT.as_secs()
            ))),
        }
    }
}
