//! Configuration for feed retrieval.
//!
//! Loaded from `FEED_`-prefixed environment variables; anything unset falls
//! back to the defaults below.

use serde::Deserialize;
use social_core::ScoreWeights;

#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Upper bound on the questions a single retrieval returns.
    #[serde(default = "default_retrieval_limit")]
    pub retrieval_limit: usize,
    /// Reputation scoring weights.
    #[serde(default)]
    pub weights: ScoreWeights,
}

fn default_retrieval_limit() -> usize {
    100
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            retrieval_limit: default_retrieval_limit(),
            weights: ScoreWeights::default(),
        }
    }
}

impl FeedConfig {
    /// Load configuration from the environment (e.g. `FEED_RETRIEVAL_LIMIT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::prefixed("FEED_").from_env()
    }
}
