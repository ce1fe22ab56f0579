use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use super::traits::HoldingsStore;
use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::portfolio::Portfolio;

/// JSON-file-backed holdings store.
///
/// The whole owner → portfolio map lives in memory and is written back
/// to disk after every mutation, so the file is always a complete
/// snapshot. Suited to the single-user scale this tracker targets.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    portfolios: RwLock<HashMap<String, Portfolio>>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading existing state if the file is
    /// present. A missing file is an empty store, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        let portfolios = if path.exists() {
            Self::load(&path)?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            portfolios: RwLock::new(portfolios),
        })
    }

    fn load(path: &Path) -> Result<HashMap<String, Portfolio>, CoreError> {
        let contents = std::fs::read_to_string(path)?;
        let portfolios = serde_json::from_str(&contents)
            .map_err(|e| CoreError::Deserialization(format!("Corrupt store file: {e}")))?;
        Ok(portfolios)
    }

    fn persist(&self, portfolios: &HashMap<String, Portfolio>) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(portfolios)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize store: {e}")))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[async_trait]
impl HoldingsStore for JsonFileStore {
    async fn get_or_create(&self, owner: &str) -> Result<Portfolio, CoreError> {
        if let Some(portfolio) = self.portfolios.read().await.get(owner) {
            return Ok(portfolio.clone());
        }

        let mut portfolios = self.portfolios.write().await;
        if !portfolios.contains_key(owner) {
            portfolios.insert(owner.to_string(), Portfolio::new(owner));
            self.persist(&portfolios)?;
        }
        Ok(portfolios[owner].clone())
    }

    async fn append(&self, owner: &str, holding: Holding) -> Result<Portfolio, CoreError> {
        let mut portfolios = self.portfolios.write().await;
        let portfolio = portfolios
            .entry(owner.to_string())
            .or_insert_with(|| Portfolio::new(owner));
        portfolio.holdings.push(holding);
        let updated = portfolio.clone();
        self.persist(&portfolios)?;
        Ok(updated)
    }
}
