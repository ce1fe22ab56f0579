// ═══════════════════════════════════════════════════════════════════
// Model Tests — Holding, Portfolio, market data shapes, summaries
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use portfolio_tracker_core::models::analytics::PortfolioSummary;
use portfolio_tracker_core::models::holding::{Holding, NewHolding, UNKNOWN_SECTOR};
use portfolio_tracker_core::models::market::{CompanyInfo, Quote, SymbolMatch};
use portfolio_tracker_core::models::portfolio::Portfolio;
use portfolio_tracker_core::models::settings::Settings;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Holding
// ═══════════════════════════════════════════════════════════════════

mod holding {
    use super::*;

    #[test]
    fn new_uppercases_symbol() {
        let h = Holding::new("aapl", 10.0, d(2024, 1, 15), 100.0, "Technology");
        assert_eq!(h.symbol, "AAPL");
    }

    #[test]
    fn new_trims_symbol_whitespace() {
        let h = Holding::new("  msft ", 1.0, d(2024, 1, 15), 50.0, "Technology");
        assert_eq!(h.symbol, "MSFT");
    }

    #[test]
    fn new_preserves_already_uppercase() {
        let h = Holding::new("NVDA", 2.0, d(2024, 1, 15), 400.0, "Technology");
        assert_eq!(h.symbol, "NVDA");
    }

    #[test]
    fn new_defaults_empty_sector_to_unknown() {
        let h = Holding::new("AAPL", 10.0, d(2024, 1, 15), 100.0, "");
        assert_eq!(h.sector, UNKNOWN_SECTOR);
    }

    #[test]
    fn new_defaults_blank_sector_to_unknown() {
        let h = Holding::new("AAPL", 10.0, d(2024, 1, 15), 100.0, "   ");
        assert_eq!(h.sector, UNKNOWN_SECTOR);
    }

    #[test]
    fn new_keeps_provided_sector() {
        let h = Holding::new("AAPL", 10.0, d(2024, 1, 15), 100.0, "Technology");
        assert_eq!(h.sector, "Technology");
    }

    #[test]
    fn new_assigns_unique_ids() {
        let a = Holding::new("AAPL", 10.0, d(2024, 1, 15), 100.0, "Technology");
        let b = Holding::new("AAPL", 10.0, d(2024, 1, 15), 100.0, "Technology");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn initial_value_is_shares_times_price() {
        let h = Holding::new("AAPL", 10.0, d(2024, 1, 15), 100.0, "Technology");
        assert!((h.initial_value() - 1000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn initial_value_supports_fractional_shares() {
        let h = Holding::new("AAPL", 2.5, d(2024, 1, 15), 100.0, "Technology");
        assert!((h.initial_value() - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serde_roundtrip_json() {
        let h = Holding::new("AAPL", 10.0, d(2024, 1, 15), 100.0, "Technology");
        let json = serde_json::to_string(&h).unwrap();
        let back: Holding = serde_json::from_str(&json).unwrap();
        assert_eq!(h, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  NewHolding
// ═══════════════════════════════════════════════════════════════════

mod new_holding {
    use super::*;

    #[test]
    fn deserializes_without_sector() {
        let json = r#"{
            "symbol": "AAPL",
            "shares": 10,
            "purchase_date": "2024-01-15",
            "purchase_price": 100.0
        }"#;
        let input: NewHolding = serde_json::from_str(json).unwrap();
        assert_eq!(input.symbol, "AAPL");
        assert_eq!(input.sector, None);
    }

    #[test]
    fn deserializes_with_sector() {
        let json = r#"{
            "symbol": "AAPL",
            "shares": 0.5,
            "purchase_date": "2024-01-15",
            "purchase_price": 100.0,
            "sector": "Technology"
        }"#;
        let input: NewHolding = serde_json::from_str(json).unwrap();
        assert_eq!(input.sector.as_deref(), Some("Technology"));
        assert!((input.shares - 0.5).abs() < f64::EPSILON);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Portfolio
// ═══════════════════════════════════════════════════════════════════

mod portfolio {
    use super::*;

    #[test]
    fn new_is_empty() {
        let p = Portfolio::new("test@test.com");
        assert_eq!(p.owner, "test@test.com");
        assert!(p.holdings.is_empty());
    }

    #[test]
    fn holdings_keep_insertion_order() {
        let mut p = Portfolio::new("test@test.com");
        // Later purchase date entered first: entry order must win
        p.holdings
            .push(Holding::new("MSFT", 1.0, d(2024, 6, 1), 300.0, ""));
        p.holdings
            .push(Holding::new("AAPL", 1.0, d(2024, 1, 1), 100.0, ""));

        assert_eq!(p.holdings[0].symbol, "MSFT");
        assert_eq!(p.holdings[1].symbol, "AAPL");
    }

    #[test]
    fn serde_roundtrip_json() {
        let mut p = Portfolio::new("test@test.com");
        p.holdings
            .push(Holding::new("AAPL", 10.0, d(2024, 1, 15), 100.0, "Technology"));
        let json = serde_json::to_string(&p).unwrap();
        let back: Portfolio = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Quote & CompanyInfo
// ═══════════════════════════════════════════════════════════════════

mod market_data {
    use super::*;

    #[test]
    fn quote_unavailable_is_zero() {
        assert_eq!(Quote::unavailable().price, 0.0);
    }

    #[test]
    fn quote_new_keeps_price() {
        assert_eq!(Quote::new(123.45).price, 123.45);
    }

    #[test]
    fn company_info_default_is_unknown_and_zero() {
        let info = CompanyInfo::default();
        assert_eq!(info.sector, UNKNOWN_SECTOR);
        assert_eq!(info.dividend_per_payment, 0.0);
    }

    #[test]
    fn symbol_match_serde_roundtrip() {
        let m = SymbolMatch {
            symbol: "AAPL".into(),
            name: "Apple Inc.".into(),
        };
        let json = serde_json::to_string(&m).unwrap();
        let back: SymbolMatch = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  PortfolioSummary
// ═══════════════════════════════════════════════════════════════════

mod summary {
    use super::*;

    #[test]
    fn empty_summary_is_all_zero() {
        let s = PortfolioSummary::empty(d(2025, 6, 1));
        assert_eq!(s.as_of_date, d(2025, 6, 1));
        assert_eq!(s.total_current_value, 0.0);
        assert_eq!(s.total_initial_value, 0.0);
        assert_eq!(s.total_profit_loss, 0.0);
        assert_eq!(s.total_profit_loss_percentage, 0.0);
        assert_eq!(s.total_annual_dividend, 0.0);
        assert_eq!(s.portfolio_dividend_yield, 0.0);
        assert_eq!(s.irr, 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn default_has_no_api_keys() {
        assert!(Settings::default().api_keys.is_empty());
    }

    #[test]
    fn with_api_key_registers_key() {
        let s = Settings::new()
            .with_api_key("polygon", "key-1")
            .with_api_key("alphavantage", "key-2");
        assert_eq!(s.api_keys.get("polygon").map(String::as_str), Some("key-1"));
        assert_eq!(
            s.api_keys.get("alphavantage").map(String::as_str),
            Some("key-2")
        );
    }
}
