use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User-configurable settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// API keys for providers that require them.
    /// Keys: provider name (e.g., "polygon", "alphavantage").
    /// Values: the API key string.
    pub api_keys: HashMap<String, String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper for registering a provider API key.
    #[must_use]
    pub fn with_api_key(mut self, provider: impl Into<String>, key: impl Into<String>) -> Self {
        self.api_keys.insert(provider.into(), key.into());
        self
    }
}
