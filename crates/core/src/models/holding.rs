use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sector label used when no classification is known.
pub const UNKNOWN_SECTOR: &str = "Unknown";

/// A single purchase lot of a ticker symbol.
///
/// **Important**: Holdings store only what was true at purchase time.
/// Current price, value, and dividend data are fetched from market-data
/// providers per request and attached as an [`EnrichedHolding`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Unique identifier
    pub id: Uuid,

    /// Ticker symbol, uppercased (e.g., "AAPL", "MSFT")
    pub symbol: String,

    /// Number of shares (always positive, fractional allowed)
    pub shares: f64,

    /// Date the lot was purchased (daily granularity)
    pub purchase_date: NaiveDate,

    /// Price per share at purchase
    pub purchase_price: f64,

    /// Sector classification recorded at entry time; "Unknown" when absent
    pub sector: String,
}

impl Holding {
    pub fn new(
        symbol: impl Into<String>,
        shares: f64,
        purchase_date: NaiveDate,
        purchase_price: f64,
        sector: impl Into<String>,
    ) -> Self {
        let sector = sector.into();
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into().trim().to_uppercase(),
            shares,
            purchase_date,
            purchase_price,
            sector: if sector.trim().is_empty() {
                UNKNOWN_SECTOR.to_string()
            } else {
                sector
            },
        }
    }

    /// Cost of this lot at purchase: shares × purchase price.
    #[must_use]
    pub fn initial_value(&self) -> f64 {
        self.shares * self.purchase_price
    }
}

/// Caller-supplied input for the add-holding operation.
/// Validated and normalized into a [`Holding`] before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHolding {
    pub symbol: String,
    pub shares: f64,
    pub purchase_date: NaiveDate,
    pub purchase_price: f64,
    #[serde(default)]
    pub sector: Option<String>,
}

/// A [`Holding`] plus per-request derived metrics.
///
/// Recomputed on every portfolio-view request, never persisted.
/// A holding whose market data could not be fetched appears here with
/// zeroed price/value fields rather than being dropped from the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedHolding {
    /// The underlying purchase lot
    pub holding: Holding,

    /// Latest price per share; 0.0 means "no data"
    pub current_price: f64,

    /// current_price × shares
    pub current_value: f64,

    /// current_value − (purchase_price × shares)
    pub profit_loss: f64,

    /// profit_loss / initial value × 100; 0 when the initial value is 0
    pub profit_loss_percentage: f64,

    /// Annualized dividend as a percent of the current price
    pub dividend_yield: f64,

    /// Latest dividend payment × assumed payments per year
    pub annual_dividend_per_share: f64,

    /// annual_dividend_per_share × shares
    pub annual_dividend_income: f64,

    /// Provider sector when known, otherwise the stored sector
    pub resolved_sector: String,

    /// When this enrichment was computed
    pub last_updated: DateTime<Utc>,
}
