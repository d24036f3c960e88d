use serde::{Deserialize, Serialize};

use super::defaults::{DEFAULT_CHART_POINTS, DEFAULT_TOKEN_COUNT};
use crate::error::{GenError, Result};

/// Generator configuration
///
/// Defaults reproduce the standard run: five tokens with six chart points
/// each, drawn from fresh OS entropy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of token records to generate
    pub token_count: usize,

    /// Number of points in each token's chart history
    pub chart_points: usize,

    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            token_count: DEFAULT_TOKEN_COUNT,
            chart_points: DEFAULT_CHART_POINTS,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token_count(mut self, token_count: usize) -> Self {
        self.token_count = token_count;
        self
    }

    pub fn with_chart_points(mut self, chart_points: usize) -> Self {
        self.chart_points = chart_points;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Reject configurations the generator cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.chart_points == 0 {
            return Err(GenError::ConfigError(
                "chart_points must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
