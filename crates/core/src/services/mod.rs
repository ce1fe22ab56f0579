pub mod analytics_service;
pub mod enrichment_service;
pub mod market_data_service;
pub mod portfolio_service;
