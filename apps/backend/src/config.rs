//! Server configuration read from the environment

use anyhow::{anyhow, Context};
use leitner_core::{HintPolicy, LeitnerSettings, MissingCardPolicy};

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Start with the demo cards in bucket 0.
    pub seed_cards: bool,
    pub settings: LeitnerSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            seed_cards: true,
            settings: LeitnerSettings::default(),
        }
    }
}

impl Config {
    /// Load from process environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve variables; unset ones keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.parse().with_context(|| format!("invalid PORT: {port}"))?;
        }
        if let Some(seed) = lookup("SEED_CARDS") {
            config.seed_cards = seed
                .parse()
                .with_context(|| format!("invalid SEED_CARDS: {seed}"))?;
        }
        if let Some(policy) = lookup("MISSING_CARD_POLICY") {
            config.settings.missing_card = MissingCardPolicy::from_str(&policy)
                .ok_or_else(|| anyhow!("invalid MISSING_CARD_POLICY: {policy}"))?;
        }
        if let Some(policy) = lookup("HINT_POLICY") {
            config.settings.hint_policy = HintPolicy::from_str(&policy)
                .ok_or_else(|| anyhow!("invalid HINT_POLICY: {policy}"))?;
        }
        if let Some(threshold) = lookup("MASTERY_THRESHOLD") {
            config.settings.mastery_threshold = threshold
                .parse()
                .with_context(|| format!("invalid MASTERY_THRESHOLD: {threshold}"))?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
