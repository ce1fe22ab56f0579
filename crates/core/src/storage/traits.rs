use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::portfolio::Portfolio;

/// Keyed record store for portfolios, one per owner identity.
///
/// The store is the only shared-state touch point in the system.
/// Appends are independent pushes onto one owner's list; there is no
/// read-modify-write of scalar state to race on. Store failures are
/// fatal to the request — retry policy, if any, belongs to the
/// implementation, not the core.
#[async_trait]
pub trait HoldingsStore: Send + Sync {
    /// Fetch the owner's portfolio, creating an empty one on first access.
    async fn get_or_create(&self, owner: &str) -> Result<Portfolio, CoreError>;

    /// Append a holding to the owner's portfolio (created if absent).
    /// Returns the updated portfolio.
    async fn append(&self, owner: &str, holding: Holding) -> Result<Portfolio, CoreError>;
}
