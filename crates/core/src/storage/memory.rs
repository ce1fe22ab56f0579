use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::traits::HoldingsStore;
use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::portfolio::Portfolio;

/// In-memory holdings store. State lives for the process lifetime only.
///
/// The default store for tests and single-session use.
#[derive(Debug, Default)]
pub struct MemoryHoldingsStore {
    portfolios: RwLock<HashMap<String, Portfolio>>,
}

impl MemoryHoldingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of portfolios currently stored.
    pub async fn portfolio_count(&self) -> usize {
        self.portfolios.read().await.len()
    }
}

#[async_trait]
impl HoldingsStore for MemoryHoldingsStore {
    async fn get_or_create(&self, owner: &str) -> Result<Portfolio, CoreError> {
        // Fast path: portfolio already exists
        if let Some(portfolio) = self.portfolios.read().await.get(owner) {
            return Ok(portfolio.clone());
        }

        let mut portfolios = self.portfolios.write().await;
        let portfolio = portfolios
            .entry(owner.to_string())
            .or_insert_with(|| Portfolio::new(owner));
        Ok(portfolio.clone())
    }

    async fn append(&self, owner: &str, holding: Holding) -> Result<Portfolio, CoreError> {
        let mut portfolios = self.portfolios.write().await;
        let portfolio = portfolios
            .entry(owner.to_string())
            .or_insert_with(|| Portfolio::new(owner));
        portfolio.holdings.push(holding);
        Ok(portfolio.clone())
    }
}
