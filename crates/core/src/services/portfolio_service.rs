use chrono::Utc;

use crate::errors::CoreError;
use crate::models::holding::{Holding, NewHolding};

/// Validates add-holding input and normalizes it into a [`Holding`].
///
/// Pure business logic — no I/O. Invalid input is rejected here, before
/// persistence, so the enrichment and aggregation paths never see a
/// malformed holding.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Validate and normalize the input into a persistable holding.
    ///
    /// Rules:
    /// - Symbol must be non-blank (uppercased on construction)
    /// - Shares and purchase price must be positive and finite
    /// - Purchase date must not be in the future
    pub fn build_holding(&self, input: NewHolding) -> Result<Holding, CoreError> {
        if input.symbol.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Symbol must not be empty".into(),
            ));
        }

        if !input.shares.is_finite() || input.shares <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Shares must be a positive number, got {}",
                input.shares
            )));
        }

        if !input.purchase_price.is_finite() || input.purchase_price <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Purchase price must be a positive number, got {}",
                input.purchase_price
            )));
        }

        let today = Utc::now().date_naive();
        if input.purchase_date > today {
            return Err(CoreError::ValidationError(format!(
                "Purchase date {} is in the future",
                input.purchase_date
            )));
        }

        Ok(Holding::new(
            input.symbol,
            input.shares,
            input.purchase_date,
            input.purchase_price,
            input.sector.unwrap_or_default(),
        ))
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
