use std::collections::HashMap;

use super::alphavantage::AlphaVantageProvider;
use super::polygon::PolygonProvider;
use super::traits::MarketDataProvider;

/// Registry of all available market-data providers.
///
/// Providers are tried in registration order: the first registered is
/// the primary, later ones serve as fallbacks. New providers can be
/// added without modifying existing code.
pub struct MarketDataRegistry {
    providers: Vec<Box<dyn MarketDataProvider>>,
}

impl MarketDataRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Create a registry with all default providers pre-configured.
    pub fn new_with_defaults(api_keys: &HashMap<String, String>) -> Self {
        let mut registry = Self::new();

        // Polygon.io — primary, requires API key
        if let Some(key) = api_keys.get("polygon") {
            registry.register(Box::new(PolygonProvider::new(key.clone())));
        }

        // Alpha Vantage — fallback, requires API key
        if let Some(key) = api_keys.get("alphavantage") {
            registry.register(Box::new(AlphaVantageProvider::new(key.clone())));
        }

        registry
    }

    /// Register a new market-data provider.
    pub fn register(&mut self, provider: Box<dyn MarketDataProvider>) {
        self.providers.push(provider);
    }

    /// All providers in priority order. Used for fallback: if the first
    /// provider fails, try the next one.
    pub fn providers(&self) -> &[Box<dyn MarketDataProvider>] {
        &self.providers
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }
}

impl Default for MarketDataRegistry {
    fn default() -> Self {
        Self::new()
    }
}
