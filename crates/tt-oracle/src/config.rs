//! Configuration for readings and the generation service.

use std::time::Duration;

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default API root for chat completions.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for a reading session.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// API key for the generation service. Readings report an error without it.
    pub api_key: Option<String>,
    /// Chat model name.
    pub model: String,
    /// API root, without the `/chat/completions` suffix.
    pub base_url: String,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
    /// Sampling temperature (0.0-2.0).
    pub temperature: f32,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
    /// Cards drawn per reading.
    pub cards_per_reading: usize,
    /// RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Pause between revealed cards and progress messages.
    pub reveal_delay: Duration,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: 150,
            temperature: 0.7,
            timeout_secs: 30,
            cards_per_reading: 3,
            seed: None,
            reveal_delay: Duration::from_secs(1),
        }
    }
}

impl ReaderConfig {
    /// Defaults overridden by `OPENAI_API_KEY`, `OPENAI_BASE_URL`, and `TAROT_MODEL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(key) = lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()) {
            cfg.api_key = Some(key);
        }
        if let Some(url) = lookup("OPENAI_BASE_URL").filter(|u| !u.trim().is_empty()) {
            cfg = cfg.with_base_url(url);
        }
        if let Some(model) = lookup("TAROT_MODEL").filter(|m| !m.trim().is_empty()) {
            cfg.model = model;
        }
        cfg
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the chat model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API root. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the sampling temperature (clamped to 0.0-2.0).
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }

    /// Set the number of cards per reading (at least 1).
    pub fn with_cards(mut self, n: usize) -> Self {
        self.cards_per_reading = n.max(1);
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the reveal delay.
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }
}
