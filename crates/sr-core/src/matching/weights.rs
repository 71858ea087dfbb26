use serde::{Deserialize, Serialize};

/// Default blend: similarity-leaning, matching the screener's slider default.
pub const DEFAULT_WEIGHTS: WeightPair = WeightPair {
    similarity: 0.6,
    coverage: 0.4,
};

/// Linear coefficients for blending JD similarity with skill coverage.
///
/// The pair is applied as-is and is never renormalized; callers who want a
/// 0-1 composite keep the coefficients summing to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightPair {
    pub similarity: f64,
    pub coverage: f64,
}

impl WeightPair {
    pub fn new(similarity: f64, coverage: f64) -> Self {
        Self {
            similarity,
            coverage,
        }
    }

    pub fn sum(&self) -> f64 {
        self.similarity + self.coverage
    }
}

impl Default for WeightPair {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}
