pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use futures::future::join_all;
use models::{
    market::StockSearchResult,
    holding::NewHolding,
    portfolio::{Portfolio, PortfolioView},
    settings::Settings,
};
use providers::registry::MarketDataRegistry;
use services::{
    analytics_service::AnalyticsService, enrichment_service::EnrichmentService,
    market_data_service::MarketDataService, portfolio_service::PortfolioService,
};
use storage::traits::HoldingsStore;

use errors::CoreError;

/// Main entry point for the Portfolio Tracker core library.
///
/// Owns the holdings store and the services that turn stored holdings
/// into the enriched portfolio view. Every operation takes an explicit
/// owner identity — there is no ambient "current user".
#[must_use]
pub struct PortfolioTracker {
    store: Box<dyn HoldingsStore>,
    market_data: MarketDataService,
    portfolio_service: PortfolioService,
    enrichment_service: EnrichmentService,
    analytics_service: AnalyticsService,
}

impl std::fmt::Debug for PortfolioTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioTracker")
            .field("providers", &self.market_data.provider_names())
            .finish()
    }
}

impl PortfolioTracker {
    /// Create a tracker with providers built from settings.
    pub fn new(store: Box<dyn HoldingsStore>, settings: &Settings) -> Self {
        let registry = MarketDataRegistry::new_with_defaults(&settings.api_keys);
        Self::with_registry(store, registry)
    }

    /// Create a tracker with an explicit provider registry.
    /// Useful for tests and custom provider stacks.
    pub fn with_registry(store: Box<dyn HoldingsStore>, registry: MarketDataRegistry) -> Self {
        Self {
            store,
            market_data: MarketDataService::new(registry),
            portfolio_service: PortfolioService::new(),
            enrichment_service: EnrichmentService::new(),
            analytics_service: AnalyticsService::new(),
        }
    }

    // ── Portfolio View ──────────────────────────────────────────────

    /// Build the full portfolio view for an owner: enriched holdings in
    /// entry order, portfolio summary, sector allocation, and highlights.
    ///
    /// Per-symbol market-data failures degrade that holding to zeroed
    /// price/value fields; only store failures fail the whole request.
    pub async fn get_portfolio_view(&self, owner: &str) -> Result<PortfolioView, CoreError> {
        let portfolio = self.store.get_or_create(owner).await?;
        let as_of = chrono::Utc::now().date_naive();

        let enriched = self
            .enrichment_service
            .enrich_all(&self.market_data, &portfolio.holdings)
            .await;

        let summary = self.analytics_service.summarize(&enriched, as_of);
        let allocation = self.analytics_service.group_by_sector(&enriched);
        let highlights = self
            .analytics_service
            .performance_highlights(&enriched, as_of);

        log::debug!(
            "Portfolio view for {owner}: {} holdings, total value {:.2}",
            enriched.len(),
            summary.total_current_value
        );

        Ok(PortfolioView {
            owner: portfolio.owner,
            holdings: enriched,
            summary,
            allocation,
            highlights,
        })
    }

    /// Get the raw stored portfolio, creating an empty one on first access.
    pub async fn get_portfolio(&self, owner: &str) -> Result<Portfolio, CoreError> {
        self.store.get_or_create(owner).await
    }

    // ── Holdings ────────────────────────────────────────────────────

    /// Validate and append a new holding to an owner's portfolio.
    ///
    /// Returns the raw updated portfolio — callers re-request the view
    /// to see enriched data.
    pub async fn add_holding(
        &self,
        owner: &str,
        input: NewHolding,
    ) -> Result<Portfolio, CoreError> {
        let holding = self.portfolio_service.build_holding(input)?;
        log::info!("Adding {} × {} for {owner}", holding.shares, holding.symbol);
        self.store.append(owner, holding).await
    }

    // ── Search ──────────────────────────────────────────────────────

    /// Search ticker symbols and decorate each candidate with current
    /// price and dividend data. Decoration soft-fails per candidate;
    /// the symbol search itself propagates errors.
    pub async fn search_stocks(&self, query: &str) -> Result<Vec<StockSearchResult>, CoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CoreError::ValidationError(
                "Search query must not be empty".into(),
            ));
        }

        let matches = self.market_data.search(query).await?;

        let decorated = matches.into_iter().map(|candidate| async move {
            let (quote, info) = tokio::join!(
                self.market_data.quote_or_default(&candidate.symbol),
                self.market_data.company_info_or_default(&candidate.symbol),
            );
            self.enrichment_service
                .decorate_match(candidate, &quote, &info)
        });

        Ok(join_all(decorated).await)
    }

    // ── Provider Availability ───────────────────────────────────────

    /// Check if at least one market-data provider is configured.
    #[must_use]
    pub fn has_market_data(&self) -> bool {
        self.market_data.has_providers()
    }

    /// Names of configured providers in fallback order.
    #[must_use]
    pub fn provider_names(&self) -> Vec<String> {
        self.market_data.provider_names()
    }
}
