// ═══════════════════════════════════════════════════════════════════
// Storage Tests — MemoryHoldingsStore, JsonFileStore
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use portfolio_tracker_core::errors::CoreError;
use portfolio_tracker_core::models::holding::Holding;
use portfolio_tracker_core::storage::file::JsonFileStore;
use portfolio_tracker_core::storage::memory::MemoryHoldingsStore;
use portfolio_tracker_core::storage::traits::HoldingsStore;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn holding(symbol: &str) -> Holding {
    Holding::new(symbol, 10.0, d(2024, 1, 15), 100.0, "Technology")
}

// ═══════════════════════════════════════════════════════════════════
// MemoryHoldingsStore
// ═══════════════════════════════════════════════════════════════════

mod memory {
    use super::*;

    #[tokio::test]
    async fn get_or_create_creates_lazily() {
        let store = MemoryHoldingsStore::new();
        assert_eq!(store.portfolio_count().await, 0);

        let p = store.get_or_create("test@test.com").await.unwrap();
        assert_eq!(p.owner, "test@test.com");
        assert!(p.holdings.is_empty());
        assert_eq!(store.portfolio_count().await, 1);
    }

    #[tokio::test]
    async fn get_or_create_is_idempotent() {
        let store = MemoryHoldingsStore::new();
        store.get_or_create("test@test.com").await.unwrap();
        store.get_or_create("test@test.com").await.unwrap();
        assert_eq!(store.portfolio_count().await, 1);
    }

    #[tokio::test]
    async fn append_returns_updated_portfolio() {
        let store = MemoryHoldingsStore::new();
        let p = store.append("test@test.com", holding("AAPL")).await.unwrap();

        assert_eq!(p.holdings.len(), 1);
        assert_eq!(p.holdings[0].symbol, "AAPL");
    }

    #[tokio::test]
    async fn append_creates_portfolio_if_absent() {
        let store = MemoryHoldingsStore::new();
        // No prior get_or_create
        let p = store.append("fresh@test.com", holding("MSFT")).await.unwrap();
        assert_eq!(p.owner, "fresh@test.com");
        assert_eq!(p.holdings.len(), 1);
    }

    #[tokio::test]
    async fn appends_keep_entry_order() {
        let store = MemoryHoldingsStore::new();
        store.append("test@test.com", holding("MSFT")).await.unwrap();
        store.append("test@test.com", holding("AAPL")).await.unwrap();
        let p = store.append("test@test.com", holding("KO")).await.unwrap();

        let symbols: Vec<&str> = p.holdings.iter().map(|h| h.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["MSFT", "AAPL", "KO"]);
    }

    #[tokio::test]
    async fn owners_are_isolated() {
        let store = MemoryHoldingsStore::new();
        store.append("a@test.com", holding("AAPL")).await.unwrap();

        let b = store.get_or_create("b@test.com").await.unwrap();
        assert!(b.holdings.is_empty());
        assert_eq!(store.portfolio_count().await, 2);
    }

    #[tokio::test]
    async fn returned_portfolio_is_a_snapshot() {
        let store = MemoryHoldingsStore::new();
        let mut p = store.get_or_create("test@test.com").await.unwrap();
        p.holdings.push(holding("AAPL"));

        // Mutating the snapshot must not touch stored state
        let fresh = store.get_or_create("test@test.com").await.unwrap();
        assert!(fresh.holdings.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
// JsonFileStore
// ═══════════════════════════════════════════════════════════════════

mod json_file {
    use super::*;

    #[tokio::test]
    async fn open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolios.json");

        let store = JsonFileStore::open(&path).unwrap();
        let p = store.get_or_create("test@test.com").await.unwrap();
        assert!(p.holdings.is_empty());
    }

    #[tokio::test]
    async fn append_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolios.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.append("test@test.com", holding("AAPL")).await.unwrap();
            store.append("test@test.com", holding("KO")).await.unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        let p = reopened.get_or_create("test@test.com").await.unwrap();
        assert_eq!(p.holdings.len(), 2);
        assert_eq!(p.holdings[0].symbol, "AAPL");
        assert_eq!(p.holdings[1].symbol, "KO");
    }

    #[tokio::test]
    async fn get_or_create_persists_new_portfolio() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolios.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.get_or_create("test@test.com").await.unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        let p = reopened.get_or_create("test@test.com").await.unwrap();
        assert_eq!(p.owner, "test@test.com");
    }

    #[tokio::test]
    async fn owners_are_isolated_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolios.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.append("a@test.com", holding("AAPL")).await.unwrap();
        store.append("b@test.com", holding("MSFT")).await.unwrap();

        let a = store.get_or_create("a@test.com").await.unwrap();
        let b = store.get_or_create("b@test.com").await.unwrap();
        assert_eq!(a.holdings[0].symbol, "AAPL");
        assert_eq!(b.holdings[0].symbol, "MSFT");
    }

    #[test]
    fn corrupt_file_is_a_deserialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolios.json");
        std::fs::write(&path, "not json at all {{{").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[tokio::test]
    async fn file_contains_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portfolios.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.append("test@test.com", holding("AAPL")).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("test@test.com"));
        assert!(contents.contains("AAPL"));
    }
}
