use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Scoring tables and weights; reference values when omitted
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

impl Config {
    /// The scoring configuration in effect
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }
}
