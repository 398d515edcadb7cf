use serde::{Deserialize, Serialize};

/// Register configuration applied to every serve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Coins charged when a cake reaches the counter without a price.
    pub flat_serving_fee: u64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            flat_serving_fee: 10,
        }
    }
}
