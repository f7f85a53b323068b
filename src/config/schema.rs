use serde::{Deserialize, Serialize};

use crate::ingest::UnknownStatusPolicy;
use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
    /// How to treat votes whose status is not recognized
    #[serde(default)]
    pub unknown_status: UnknownStatusPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: Some(ScoringConfig::default()),
            unknown_status: UnknownStatusPolicy::default(),
        }
    }
}

impl Config {
    /// Scoring section with defaults filled in
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }
}
